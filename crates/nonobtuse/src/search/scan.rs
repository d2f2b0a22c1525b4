//! Face scans shared by every search.

use crate::geom::{Boundary, Side, Triangle};
use crate::heuristic::ShapeFeatures;
use crate::kernel::GeometryKernel;

/// Finite faces whose centroid is not outside the region.
pub fn region_faces<K: GeometryKernel>(kernel: &K, boundary: &Boundary) -> Vec<Triangle> {
    kernel
        .faces()
        .into_iter()
        .filter(|t| boundary.classify(t.centroid()) != Side::Outside)
        .collect()
}

/// Obtuse region faces in enumeration order.
pub fn obtuse_faces<K: GeometryKernel>(kernel: &K, boundary: &Boundary) -> Vec<Triangle> {
    region_faces(kernel, boundary)
        .into_iter()
        .filter(Triangle::is_obtuse)
        .collect()
}

pub fn count_obtuse<K: GeometryKernel>(kernel: &K, boundary: &Boundary) -> usize {
    kernel
        .faces()
        .iter()
        .filter(|t| t.is_obtuse() && boundary.classify(t.centroid()) != Side::Outside)
        .count()
}

/// Obtuse neighbors reachable across unconstrained edges.
pub fn adjacent_obtuse<K: GeometryKernel>(kernel: &K, tri: &Triangle) -> usize {
    (0..3)
        .filter(|&i| {
            let (p, q) = tri.opposite_edge(i);
            !kernel.is_constrained_edge(p, q)
                && kernel
                    .neighbor(tri, i)
                    .is_some_and(|(other, _)| other.is_obtuse())
        })
        .count()
}

pub fn features<K: GeometryKernel>(kernel: &K, tri: &Triangle) -> ShapeFeatures {
    ShapeFeatures {
        rho: tri.shape_ratio(),
        adjacent_obtuse: adjacent_obtuse(kernel, tri),
    }
}

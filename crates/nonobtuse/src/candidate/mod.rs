//! Candidate generation: strategy + triangle → proposed Steiner point.
//!
//! Purpose
//! - Produce at most one candidate per (triangle, strategy) and filter it
//!   against the region boundary.
//! - Apply a candidate to a kernel, including the conflict-removal step of the
//!   convex-hull strategy.
//!
//! Conventions
//! - Only obtuse triangles get candidates.
//! - `apply` mutates in place and may leave a kernel half-updated on error;
//!   it is meant for scratch copies. Searches go through `applied`, which
//!   works on a copy, and swap the result in only when they accept the move.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::SearchError;
use crate::geom::{self, Boundary, Point, Side, Triangle};
use crate::kernel::GeometryKernel;
use crate::strategy::Strategy;

/// Rejection-sampling attempts for `RandomInterior`.
pub const RANDOM_ATTEMPTS: usize = 100;

/// A proposed insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub point: Point,
    pub strategy: Strategy,
    /// Convex region (cyclic order) whose sides are constrained before
    /// insertion and whose strict interior is cleared afterwards.
    pub region: Option<Vec<Point>>,
}

impl Candidate {
    fn at(point: Point, strategy: Strategy) -> Self {
        Self {
            point,
            strategy,
            region: None,
        }
    }
}

/// Proposes and applies candidates inside one region.
#[derive(Clone, Copy, Debug)]
pub struct CandidateGenerator<'a> {
    boundary: &'a Boundary,
    allow_boundary_points: bool,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(boundary: &'a Boundary, allow_boundary_points: bool) -> Self {
        Self {
            boundary,
            allow_boundary_points,
        }
    }

    /// Inside the region, or on its boundary when that is allowed.
    pub fn is_valid(&self, p: Point) -> bool {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return false;
        }
        match self.boundary.classify(p) {
            Side::Inside => true,
            Side::OnBoundary => self.allow_boundary_points,
            Side::Outside => false,
        }
    }

    /// Candidate for `tri` under `strategy`, or `None` if `tri` is not obtuse,
    /// the strategy has nothing to offer, or its point falls outside the region.
    pub fn propose<K, R>(
        &self,
        kernel: &K,
        tri: &Triangle,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Option<Candidate>, SearchError>
    where
        K: GeometryKernel,
        R: Rng + ?Sized,
    {
        if !tri.is_obtuse() {
            return Ok(None);
        }
        let candidate = match strategy {
            Strategy::MaxEdgeMidpoint => Some(Candidate::at(tri.longest_edge_midpoint(), strategy)),
            Strategy::Circumcenter => {
                let i = tri
                    .obtuse_vertex()
                    .ok_or(SearchError::NoObtuseVertex { triangle: *tri })?;
                let (p, q) = tri.opposite_edge(i);
                if kernel.is_constrained_edge(p, q) {
                    None
                } else {
                    tri.circumcenter().map(|c| Candidate::at(c, strategy))
                }
            }
            Strategy::ConvexHullCentroid => Some(hull_candidate(kernel, tri)),
            Strategy::VertexProjection => tri.obtuse_vertex().map(|i| {
                let (p, q) = tri.opposite_edge(i);
                Candidate::at(geom::project_onto_line(tri.vertex(i), p, q), strategy)
            }),
            Strategy::Centroid => Some(Candidate::at(tri.centroid(), strategy)),
            Strategy::RandomInterior => {
                random_interior(tri, rng).map(|p| Candidate::at(p, strategy))
            }
            Strategy::Bisection | Strategy::Altitude | Strategy::None => None,
        };
        Ok(candidate.filter(|c| self.is_valid(c.point)))
    }

    /// Insert `candidate` into `kernel` in place.
    pub fn apply<K: GeometryKernel>(
        &self,
        kernel: &mut K,
        candidate: &Candidate,
    ) -> Result<(), SearchError> {
        if let Some(region) = &candidate.region {
            let n = region.len();
            for i in 0..n {
                kernel.insert_constraint(region[i], region[(i + 1) % n])?;
            }
        }
        kernel.insert(candidate.point)?;
        if let Some(region) = &candidate.region {
            remove_conflicts(kernel, region, candidate.point);
        }
        Ok(())
    }

    /// Copy of `kernel` with `candidate` applied; `None` if it does not apply.
    pub fn applied<K: GeometryKernel>(&self, kernel: &K, candidate: &Candidate) -> Option<K> {
        let mut next = kernel.snapshot();
        match self.apply(&mut next, candidate) {
            Ok(()) => Some(next),
            Err(err) => {
                tracing::debug!(strategy = %candidate.strategy, %err, "candidate does not apply");
                None
            }
        }
    }
}

/// Grow `[a, b, c]` over obtuse neighbors while it stays convex.
fn hull_candidate<K: GeometryKernel>(kernel: &K, tri: &Triangle) -> Candidate {
    let mut polygon = tri.vertices().to_vec();
    for i in 0..3 {
        let (p, q) = tri.opposite_edge(i);
        if kernel.is_constrained_edge(p, q) {
            continue;
        }
        let Some((other, apex)) = kernel.neighbor(tri, i) else {
            continue;
        };
        if !other.is_obtuse() {
            continue;
        }
        // Shared edges follow the cycle a→b→c, so the apex goes right after `p`.
        let Some(at) = polygon.iter().position(|&v| v == p) else {
            continue;
        };
        polygon.insert(at + 1, other.vertex(apex));
        if !geom::is_convex(&polygon) {
            polygon.remove(at + 1);
        }
    }
    if polygon.len() == 3 {
        return Candidate::at(tri.centroid(), Strategy::ConvexHullCentroid);
    }
    let point = geom::centroid(&polygon).unwrap_or_else(|| tri.centroid());
    Candidate {
        point,
        strategy: Strategy::ConvexHullCentroid,
        region: Some(polygon),
    }
}

/// Drop every vertex strictly inside `region` except `keep`.
fn remove_conflicts<K: GeometryKernel>(kernel: &mut K, region: &[Point], keep: Point) {
    let Some(shape) = Boundary::new(region.to_vec()) else {
        return;
    };
    let inside: Vec<Point> = kernel
        .vertices()
        .into_iter()
        .filter(|&v| v != keep && shape.contains_strictly(v))
        .collect();
    for v in inside {
        if kernel.remove(v) {
            tracing::trace!(x = v.x, y = v.y, "removed conflicting vertex");
        }
    }
}

/// Gaussian sample around the barycenter, kept only if inside the triangle.
fn random_interior<R: Rng + ?Sized>(tri: &Triangle, rng: &mut R) -> Option<Point> {
    let (a, b, c) = (tri.a, tri.b, tri.c);
    let center = tri.centroid();
    let sigma_x = ((b.x - a.x) + (c.x - a.x)).abs() / 6.0;
    let sigma_y = ((b.y - a.y) + (c.y - a.y)).abs() / 6.0;
    for _ in 0..RANDOM_ATTEMPTS {
        let dx: f64 = StandardNormal.sample(rng);
        let dy: f64 = StandardNormal.sample(rng);
        let p = Point::new(center.x + sigma_x * dx, center.y + sigma_y * dy);
        if tri.contains_barycentric(p) {
            return Some(p);
        }
    }
    None
}

#[cfg(test)]
mod tests;

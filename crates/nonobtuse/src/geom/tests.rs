use super::*;
use nalgebra::vector;

fn tri(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle {
    Triangle::new(vector![a[0], a[1]], vector![b[0], b[1]], vector![c[0], c[1]])
}

#[test]
fn right_triangle_is_not_obtuse() {
    let t = tri([0.0, 0.0], [3.0, 0.0], [0.0, 4.0]);
    assert!(!t.is_obtuse());
    assert_eq!(t.obtuse_vertex(), None);
    // Circumcenter of a right triangle is the hypotenuse midpoint.
    let cc = t.circumcenter().unwrap();
    assert!((cc - vector![1.5, 2.0]).norm() < 1e-12);
    assert!((t.shape_ratio() - 25.0 / 24.0).abs() < 1e-12);
}

#[test]
fn obtuse_vertex_index_follows_vertex_order() {
    // Obtuse angle at the apex (0, 1).
    let at_a = tri([0.0, 1.0], [-4.0, 0.0], [4.0, 0.0]);
    let at_b = tri([-4.0, 0.0], [0.0, 1.0], [4.0, 0.0]);
    let at_c = tri([-4.0, 0.0], [4.0, 0.0], [0.0, 1.0]);
    assert_eq!(at_a.obtuse_vertex(), Some(0));
    assert_eq!(at_b.obtuse_vertex(), Some(1));
    assert_eq!(at_c.obtuse_vertex(), Some(2));
    let (p, q) = at_c.opposite_edge(2);
    assert_eq!((p, q), (at_c.a, at_c.b));
}

#[test]
fn longest_edge_midpoint_breaks_ties_in_edge_order() {
    // Isosceles right triangle: ab is the hypotenuse.
    let t = tri([0.0, 0.0], [2.0, 2.0], [2.0, 0.0]);
    assert_eq!(t.longest_edge_midpoint(), vector![1.0, 1.0]);
    // bc and ca tie; bc comes first.
    let tall = tri([0.0, 0.0], [2.0, 0.0], [1.0, 5.0]);
    assert_eq!(tall.longest_edge_midpoint(), vector![1.5, 2.5]);
}

#[test]
fn degenerate_triangle_reports_sentinel_ratio() {
    let flat = tri([0.0, 0.0], [1.0, 0.0], [2.0, 0.0]);
    assert!(flat.is_degenerate());
    assert_eq!(flat.shape_ratio(), -1.0);
    assert!(flat.circumcenter().is_none());
}

#[test]
fn barycentric_inside_test_includes_edges() {
    let t = tri([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
    assert!(t.contains_barycentric(vector![1.0, 1.0]));
    assert!(t.contains_barycentric(vector![2.0, 0.0]));
    assert!(!t.contains_barycentric(vector![3.0, 3.0]));
}

#[test]
fn projection_and_centroid() {
    let p = project_onto_line(vector![1.0, 3.0], vector![0.0, 0.0], vector![4.0, 0.0]);
    assert_eq!(p, vector![1.0, 0.0]);
    let c = centroid(&[vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 2.0], vector![0.0, 2.0]]);
    assert_eq!(c, Some(vector![1.0, 1.0]));
    assert_eq!(centroid(&[]), None);
}

#[test]
fn convexity_respects_cyclic_order() {
    let square = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]];
    assert!(is_convex(&square));
    let bowtie = [vector![0.0, 0.0], vector![1.0, 1.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    assert!(!is_convex(&bowtie));
    assert!(!is_convex(&square[..2]));
}

#[test]
fn boundary_classification() {
    let b = Boundary::new(vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![2.0, 1.0],
        vector![0.0, 4.0],
    ])
    .unwrap();
    assert_eq!(b.classify(vector![1.0, 0.5]), Side::Inside);
    assert_eq!(b.classify(vector![2.0, 0.0]), Side::OnBoundary);
    assert_eq!(b.classify(vector![4.0, 4.0]), Side::OnBoundary);
    assert_eq!(b.classify(vector![2.0, 3.0]), Side::Outside);
    assert_eq!(b.classify(vector![5.0, 1.0]), Side::Outside);
    assert!(Boundary::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]).is_none());
}

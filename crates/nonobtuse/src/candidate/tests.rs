use super::*;
use crate::kernel::CdtKernel;
use nalgebra::vector;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn region(points: &[Point]) -> (CdtKernel, Boundary) {
    let cycle: Vec<usize> = (0..points.len()).collect();
    let kernel = CdtKernel::from_parts(points, &[], &cycle).unwrap();
    (kernel, Boundary::new(points.to_vec()).unwrap())
}

fn flat() -> (CdtKernel, Boundary) {
    region(&[vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 1.0]])
}

/// Two obtuse faces sharing the unconstrained diagonal (10,0)-(3,1).
fn parallelogram() -> (CdtKernel, Boundary) {
    region(&[
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![13.0, 1.0],
        vector![3.0, 1.0],
    ])
}

#[test]
fn right_triangle_has_no_candidates() {
    let (kernel, boundary) = region(&[vector![0.0, 0.0], vector![3.0, 0.0], vector![0.0, 4.0]]);
    let tri = kernel.faces()[0];
    let mut rng = StdRng::seed_from_u64(1);
    assert!(!tri.is_obtuse());
    for allow in [false, true] {
        let gen = CandidateGenerator::new(&boundary, allow);
        for s in Strategy::ALL {
            let c = gen.propose(&kernel, &tri, s, &mut rng);
            assert!(matches!(c, Ok(None)), "{s}: {c:?}");
        }
    }
}

#[test]
fn boundary_points_need_permission() {
    let (kernel, boundary) = flat();
    let tri = kernel.faces()[0];
    let mut rng = StdRng::seed_from_u64(2);
    let strict = CandidateGenerator::new(&boundary, false);
    let lenient = CandidateGenerator::new(&boundary, true);
    for s in [Strategy::MaxEdgeMidpoint, Strategy::VertexProjection] {
        assert!(strict.propose(&kernel, &tri, s, &mut rng).unwrap().is_none());
        let c = lenient.propose(&kernel, &tri, s, &mut rng).unwrap().unwrap();
        assert!((c.point - vector![2.0, 0.0]).norm() < 1e-12, "{s}");
    }
}

#[test]
fn circumcenter_skips_constrained_long_edge() {
    let (kernel, boundary) = flat();
    let gen = CandidateGenerator::new(&boundary, true);
    let tri = kernel.faces()[0];
    let mut rng = StdRng::seed_from_u64(3);
    let c = gen.propose(&kernel, &tri, Strategy::Circumcenter, &mut rng).unwrap();
    assert!(c.is_none());
}

#[test]
fn placeholder_strategies_never_propose() {
    let (kernel, boundary) = flat();
    let gen = CandidateGenerator::new(&boundary, true);
    let tri = kernel.faces()[0];
    let mut rng = StdRng::seed_from_u64(4);
    for s in [Strategy::Bisection, Strategy::Altitude, Strategy::None] {
        assert!(gen.propose(&kernel, &tri, s, &mut rng).unwrap().is_none());
    }
}

#[test]
fn random_interior_lands_inside() {
    let (kernel, boundary) = flat();
    let gen = CandidateGenerator::new(&boundary, false);
    let tri = kernel.faces()[0];
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        if let Some(c) = gen.propose(&kernel, &tri, Strategy::RandomInterior, &mut rng).unwrap() {
            assert!(tri.contains_barycentric(c.point));
            assert!(boundary.contains_strictly(c.point));
        }
    }
}

#[test]
fn hull_grows_over_obtuse_neighbor() {
    let (kernel, boundary) = parallelogram();
    let faces = kernel.faces();
    assert_eq!(faces.len(), 2);
    assert!(faces.iter().all(|f| f.is_obtuse()));
    let gen = CandidateGenerator::new(&boundary, false);
    let mut rng = StdRng::seed_from_u64(6);
    let c = gen
        .propose(&kernel, &faces[0], Strategy::ConvexHullCentroid, &mut rng)
        .unwrap()
        .unwrap();
    let hull = c.region.clone().unwrap();
    assert_eq!(hull.len(), 4);
    assert!(geom::is_convex(&hull));
    assert!((c.point - vector![6.5, 0.5]).norm() < 1e-12);

    let next = gen.applied(&kernel, &c).unwrap();
    assert_eq!(next.vertices().len(), 5);
    assert_eq!(next.faces().len(), 4);
}

#[test]
fn conflicts_inside_region_are_removed() {
    let (mut kernel, _) = region(&[
        vector![0.0, 0.0],
        vector![8.0, 0.0],
        vector![8.0, 8.0],
        vector![0.0, 8.0],
    ]);
    kernel.insert(vector![3.0, 3.0]).unwrap();
    kernel.insert(vector![5.0, 5.0]).unwrap();
    let square = [
        vector![2.0, 2.0],
        vector![6.0, 2.0],
        vector![6.0, 6.0],
        vector![2.0, 6.0],
    ];
    remove_conflicts(&mut kernel, &square, vector![5.0, 5.0]);
    let vs = kernel.vertices();
    assert!(!vs.contains(&vector![3.0, 3.0]));
    assert!(vs.contains(&vector![5.0, 5.0]));
    assert_eq!(vs.len(), 5);
}

#[test]
fn failed_application_leaves_kernel_untouched() {
    let (mut kernel, boundary) = region(&[
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ]);
    kernel
        .insert_constraint(vector![0.0, 0.0], vector![4.0, 4.0])
        .unwrap();
    let before = kernel.snapshot();
    let gen = CandidateGenerator::new(&boundary, false);
    let bad = Candidate {
        point: vector![1.5, 2.5],
        strategy: Strategy::ConvexHullCentroid,
        region: Some(vec![vector![4.0, 0.0], vector![0.0, 4.0], vector![1.0, 3.0]]),
    };
    assert!(gen.applied(&kernel, &bad).is_none());
    assert!(kernel.same_as(&before));
    let mut scratch = kernel.snapshot();
    assert!(gen.apply(&mut scratch, &bad).is_err());
}

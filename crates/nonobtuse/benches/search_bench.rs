//! Criterion benchmarks for the refinement searches.
//! Instances: random points in a square, n in {10, 25, 50}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p nonobtuse

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::vector;
use nonobtuse::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(n: usize, seed: u64) -> (CdtKernel, Boundary) {
    let corners = vec![
        vector![0.0, 0.0],
        vector![100.0, 0.0],
        vector![100.0, 100.0],
        vector![0.0, 100.0],
    ];
    let mut kernel = CdtKernel::from_parts(&corners, &[], &[0, 1, 2, 3]).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..n {
        let p = vector![rng.gen_range(1.0..99.0), rng.gen_range(1.0..99.0)];
        kernel.insert(p).unwrap();
    }
    (kernel, Boundary::new(corners).unwrap())
}

fn bench_methods(c: &mut Criterion) {
    let cfg = SearchCfg {
        iteration_cap: 10,
        restart: false,
        ..SearchCfg::default()
    };
    let mut group = c.benchmark_group("refine");
    group.sample_size(10);
    for &n in &[10usize, 25, 50] {
        for method in [
            Method::default(),
            Method::Local,
            Method::Annealing,
            Method::AntColony,
        ] {
            group.bench_with_input(BenchmarkId::new(method.to_string(), n), &n, |b, &n| {
                b.iter_batched(
                    || random_instance(n, 42),
                    |(mut kernel, boundary)| {
                        let mut rng = StdRng::seed_from_u64(7);
                        let _out =
                            refine(method, &mut kernel, &boundary, &[], &cfg, &mut rng).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("propose");
    let (kernel, boundary) = random_instance(50, 43);
    let gen = CandidateGenerator::new(&boundary, false);
    let faces = kernel.faces();
    let obtuse: Vec<Triangle> = faces.into_iter().filter(Triangle::is_obtuse).collect();
    for strategy in [
        Strategy::MaxEdgeMidpoint,
        Strategy::Circumcenter,
        Strategy::ConvexHullCentroid,
        Strategy::VertexProjection,
        Strategy::RandomInterior,
    ] {
        group.bench_function(BenchmarkId::new("strategy", strategy.name()), |b| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                for tri in &obtuse {
                    let _c = gen.propose(&kernel, tri, strategy, &mut rng).unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_candidates);
criterion_main!(benches);

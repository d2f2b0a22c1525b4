//! Refine a small obtuse-heavy polygon with every method and print a summary.
//!
//! Usage:
//!   cargo run -p nonobtuse --example refine_polygon -- [seed]

use nalgebra::vector;
use nonobtuse::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn instance() -> (CdtKernel, Boundary) {
    let outline = vec![
        vector![0.0, 0.0],
        vector![20.0, 0.0],
        vector![24.0, 6.0],
        vector![12.0, 9.0],
        vector![0.0, 6.0],
    ];
    let mut kernel = CdtKernel::from_parts(&outline, &[], &[0, 1, 2, 3, 4]).unwrap();
    for p in [
        vector![5.0, 1.0],
        vector![10.0, 1.5],
        vector![15.0, 1.0],
        vector![8.0, 5.0],
    ] {
        kernel.insert(p).unwrap();
    }
    (kernel, Boundary::new(outline).unwrap())
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let cfg = SearchCfg::default();
    for method in [
        Method::default(),
        Method::Local,
        Method::Annealing,
        Method::AntColony,
        Method::AnnealingThenLocal,
        Method::AntColonyThenLocal,
    ] {
        let (mut kernel, boundary) = instance();
        let mut rng = StdRng::seed_from_u64(seed);
        match refine(method, &mut kernel, &boundary, &[], &cfg, &mut rng) {
            Ok(out) => {
                let r = &out.report;
                println!(
                    "{:>16}: obtuse {:>2} -> {:>2}  steiner {:>3}  iters {:>3}  energy {:.1}",
                    method.to_string(),
                    r.initial_obtuse,
                    r.final_obtuse,
                    r.steiner_points,
                    r.iterations,
                    r.final_energy
                );
            }
            Err(err) => eprintln!("{method}: {err}"),
        }
    }
}

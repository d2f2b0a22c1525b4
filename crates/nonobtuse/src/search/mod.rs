//! Refinement searches over a `GeometryKernel`.
//!
//! Purpose
//! - Drive Steiner-point insertion until no obtuse face is left, the
//!   iteration cap is hit, or no move improves the state.
//! - Four searches share the same move primitive (propose on a face, apply to
//!   a scratch copy, count, commit or discard): `simple_greedy`,
//!   `local_search`, `simulated_annealing` and `ant_colony`. The randomized
//!   restart is the escape hatch used when a search stalls.
//!
//! Why this design
//! - Every evaluation happens on a snapshot, and the live kernel is replaced
//!   wholesale on commit. Rejected moves therefore never leave residue, and a
//!   run that stops early has only ever exposed complete states.
//! - Randomness is drawn from the caller's RNG so seeded runs are
//!   reproducible.
//!
//! Code cross-refs: `candidate::CandidateGenerator`, `pheromone`,
//! `heuristic`, `SearchCfg`.

mod annealing;
mod ant;
mod driver;
mod greedy;
mod local;
pub mod metric;
mod report;
mod restart;
pub mod scan;

pub use annealing::{simulated_annealing, temperature};
pub use ant::ant_colony;
pub use driver::{refine, Method};
pub use greedy::simple_greedy;
pub use local::local_search;
pub use metric::ConvergenceLog;
pub use report::{Outcome, Report};
pub use restart::randomized_restart;

use crate::candidate::CandidateGenerator;
use crate::config::SearchCfg;
use crate::geom::{Boundary, Triangle};
use crate::kernel::GeometryKernel;
use crate::strategy::Strategy;

/// Everything a search needs besides the kernel and the RNG.
#[derive(Clone, Copy, Debug)]
pub struct Problem<'a> {
    pub boundary: &'a Boundary,
    pub strategies: &'a [Strategy],
    pub cfg: &'a SearchCfg,
}

impl<'a> Problem<'a> {
    pub fn new(boundary: &'a Boundary, strategies: &'a [Strategy], cfg: &'a SearchCfg) -> Self {
        Self {
            boundary,
            strategies,
            cfg,
        }
    }

    pub fn generator(&self) -> CandidateGenerator<'a> {
        CandidateGenerator::new(self.boundary, self.cfg.allow_boundary_points)
    }

    pub fn count<K: GeometryKernel>(&self, kernel: &K) -> usize {
        scan::count_obtuse(kernel, self.boundary)
    }

    pub fn obtuse_faces<K: GeometryKernel>(&self, kernel: &K) -> Vec<Triangle> {
        scan::obtuse_faces(kernel, self.boundary)
    }

    /// Same region and parameters, different strategy list.
    pub fn with_strategies(&self, strategies: &'a [Strategy]) -> Self {
        Self { strategies, ..*self }
    }
}

//! Non-obtuse refinement of planar constrained triangulations.
//!
//! A triangulation of a polygonal region is improved by inserting Steiner
//! points until no triangle has an obtuse angle, or until the chosen search
//! stops improving. The searches (greedy, local search, simulated annealing,
//! ant colony) share one move primitive and talk to the triangulation only
//! through the `GeometryKernel` trait.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve clarity.

pub mod candidate;
pub mod config;
pub mod energy;
pub mod error;
pub mod geom;
pub mod heuristic;
pub mod kernel;
pub mod pheromone;
pub mod search;
pub mod strategy;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::SearchCfg;
pub use error::SearchError;
pub use search::{refine, Method, Outcome, Report};
pub use strategy::Strategy;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::candidate::{Candidate, CandidateGenerator};
    pub use crate::geom::{Boundary, Point, Side, Triangle};
    pub use crate::kernel::{CdtKernel, GeometryKernel, KernelError};
    pub use crate::search::{refine, Method, Outcome, Problem, Report};
    pub use crate::{SearchCfg, SearchError, Strategy};
}

//! Planar geometry used by the refinement engine.
//!
//! Purpose
//! - Provide the stateless predicates and constructions the search consumes:
//!   obtuse classification, circumcenter, centroid, projection, the shape
//!   descriptor ρ, convexity and point-in-polygon tests.
//! - Keep everything on plain `f64` vectors (`nalgebra::Vector2`). Inputs are
//!   benchmark-scale integer coordinates, so sign tests on dot and cross
//!   products are exact for the input points and robust enough for the
//!   constructed ones.
//!
//! Code cross-refs: `kernel::GeometryKernel`, `candidate::CandidateGenerator::propose`

mod boundary;
mod triangle;
mod util;

pub use boundary::{Boundary, Side};
pub use triangle::Triangle;
pub use util::{centroid, cross, is_convex, project_onto_line};

/// A point in the plane.
pub type Point = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;

//! Triangulation kernel seam.
//!
//! Purpose
//! - The search engine never inspects triangulation internals; it talks to a
//!   `GeometryKernel` through insert/remove/constrain, face enumeration and
//!   adjacency queries, and takes scratch copies via `snapshot`.
//! - `CdtKernel` is the production implementation on top of spade's
//!   constrained Delaunay triangulation. Any other kernel honoring the trait
//!   contract is substitutable.
//!
//! Conventions
//! - Vertices are addressed by position. Removal invalidates handles in the
//!   underlying structure, so positions are the only stable identity.
//! - `faces()` enumerates finite faces in a stable order for a given state;
//!   scans that depend on "first obtuse face" rely on this.

mod cdt;

pub use cdt::CdtKernel;

use crate::geom::{Point, Triangle};

/// Failure of a kernel mutation. The kernel is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("point ({x}, {y}) rejected by the triangulation")]
    Rejected { x: f64, y: f64 },
    #[error("constraint {from:?} -> {to:?} crosses an existing constraint")]
    ConstraintConflict { from: [f64; 2], to: [f64; 2] },
    #[error("vertex index {0} out of range")]
    UnknownVertex(usize),
}

/// Capability interface the refinement engine consumes.
pub trait GeometryKernel: Clone {
    /// Insert a vertex; inserting an existing position is a no-op.
    fn insert(&mut self, p: Point) -> Result<(), KernelError>;

    /// Constrain the segment `a`–`b`, inserting missing endpoints.
    fn insert_constraint(&mut self, a: Point, b: Point) -> Result<(), KernelError>;

    /// Remove the vertex at `p`. Returns whether a vertex was removed.
    fn remove(&mut self, p: Point) -> bool;

    /// Finite faces in enumeration order.
    fn faces(&self) -> Vec<Triangle>;

    /// Whether `tri` is still a face of the current triangulation.
    fn has_face(&self, tri: &Triangle) -> bool;

    fn vertices(&self) -> Vec<Point>;

    /// Undirected finite edges as endpoint pairs.
    fn edges(&self) -> Vec<(Point, Point)>;

    /// Finite face across the edge opposite vertex `i` of `tri`, together with
    /// the index of that face's vertex opposite the shared edge.
    fn neighbor(&self, tri: &Triangle, i: usize) -> Option<(Triangle, usize)>;

    fn is_constrained_edge(&self, a: Point, b: Point) -> bool;

    /// Structural equality of two states (same vertices, edges, constraints).
    fn same_as(&self, other: &Self) -> bool;

    /// Independent scratch copy.
    fn snapshot(&self) -> Self {
        self.clone()
    }
}

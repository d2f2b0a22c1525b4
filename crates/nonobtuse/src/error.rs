//! Error type for the search layer.

use thiserror::Error;

use crate::geom::Triangle;
use crate::kernel::KernelError;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Rejected before any work is done (e.g. evaporation rate outside `[0, 1)`).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A face that tests obtuse yet reports no obtuse vertex.
    #[error("triangle {triangle:?} has no obtuse vertex")]
    NoObtuseVertex { triangle: Triangle },
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a grid cannot be built from the given dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridShapeError {
    #[display("grid size must be at least 2, got {size}")]
    TooSmall { size: usize },
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

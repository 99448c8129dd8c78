use floodmap_core::{GridError, Point};
use thiserror::Error;

/// Invalid arguments to a flood. Raised before any work is done, so a
/// failed call never produces a partial field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FloodError {
    /// A wall mask does not have the same size as the input map.
    #[error("wall map is {}x{}, expected {}x{} to match the input map", found.x, found.y, expected.x, expected.y)]
    DimensionMismatch {
        /// Size of the input map (width = x, height = y).
        expected: Point,
        /// Size of the offending wall map.
        found: Point,
    },
    /// The limit was below zero.
    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(i32),
    /// The input map has no cells.
    #[error("input map is empty")]
    EmptyGrid,
    /// A position passed to the chase tick lies outside the map.
    #[error("position {0} is outside the map")]
    OutOfBounds(Point),
    /// Caller data could not be turned into a grid.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

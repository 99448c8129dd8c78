//! **floodmap-core**: grid and geometry types shared by the *floodmap*
//! crates.
//!
//! This crate provides [`Point`] and [`Range`] for addressing cells, and an
//! owned row-major [`Grid`] used for source maps, wall masks and distance
//! fields alike.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError};

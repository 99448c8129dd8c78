//! Distance fields ("Dijkstra maps") for grid-based games.
//!
//! A distance field holds, for every cell of a grid, the number of steps to
//! the nearest of any number of target cells. Moves go to all 8 neighbours at
//! the same cost, walls are never crossed, and an optional limit stops the
//! flood early. Any number of agents can then chase the nearest target by
//! greedy descent over one shared field, with no search of their own.
//!
//! - [`dijkstra_map`] builds a field from an integer map where 0 marks a
//!   target, plus an optional integer wall map.
//! - [`flood`] is the underlying multi-source breadth-first flood over typed
//!   [`Seed`] and wall grids.
//! - [`chase_step`] and [`advance_chasers`] consume a field.
//!
//! ```
//! use floodmap_core::Grid;
//! use floodmap_paths::dijkstra_map;
//!
//! let input = Grid::from_rows(&[[1, 1, 0]]).unwrap();
//! let field = dijkstra_map(&input, None, 0).unwrap();
//! assert_eq!(field.to_rows(), vec![vec![2, 1, 0]]);
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Implemented by |
//! |---|---|
//! | [`DistanceView`] | [`DistanceField`] |
//! | [`ObstacleView`] | `Grid<bool>` |

mod chase;
mod dijkstra;
mod error;
mod field;
mod flood;
mod neighbors;
mod traits;

pub use chase::{ChaseTick, advance_chasers, chase_step};
pub use dijkstra::{dijkstra_map, dijkstra_map_masked, target_seeds, wall_mask};
pub use error::FloodError;
pub use field::{ADJACENT, DistanceField, Limit};
pub use flood::{Seed, flood};
pub use neighbors::{DIRECTIONS, Neighbors};
pub use traits::{DistanceView, ObstacleView};

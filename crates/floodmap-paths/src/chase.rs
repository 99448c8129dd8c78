//! Greedy descent over a distance field.
//!
//! A chaser needs no search of its own: each tick it steps to whichever free
//! neighbour is closest to the target according to a shared field.

use floodmap_core::{Grid, Point};

use crate::FloodError;
use crate::dijkstra::dijkstra_map_masked;
use crate::field::{ADJACENT, DistanceField};
use crate::neighbors::Neighbors;
use crate::traits::{DistanceView, ObstacleView};

/// Pick the cell a chaser standing on `from` should move to.
///
/// The chaser moves to the free neighbour with the lowest distance, the first
/// one in [`DIRECTIONS`](crate::DIRECTIONS) order on ties. That neighbour
/// need not be lower than `from`, so a chaser whose downhill cells are taken
/// sidesteps around them.
///
/// Returns `from` itself when the chaser is already next to the target, when
/// every neighbour is blocked, or when `from` holds 0: a chaser is never on
/// the target, so 0 means it is cut off from every source.
pub fn chase_step<D, O>(field: &D, obstacles: &O, from: Point) -> Point
where
    D: DistanceView,
    O: ObstacleView,
{
    let Some(here) = field.distance_at(from) else {
        return from;
    };
    if here == ADJACENT || here == 0 {
        return from;
    }

    let mut lowest = i32::MAX;
    let mut best = from;
    let mut nb = Neighbors::new();
    let free = nb.all(from, |n| !obstacles.is_blocked(n));
    for &n in free {
        let Some(d) = field.distance_at(n) else {
            continue;
        };
        if d < lowest {
            lowest = d;
            best = n;
        }
    }
    best
}

/// Outcome of one [`advance_chasers`] tick.
#[derive(Debug, Clone)]
pub struct ChaseTick {
    /// The field the chasers descended.
    pub field: DistanceField,
    /// How many chasers changed cell.
    pub moved: usize,
}

/// Run one update: flood toward `target` and move every chaser one step.
///
/// Chasers move in slice order. The target and every chaser block movement;
/// a chaser's own cell is freed while it decides and its new cell is taken
/// right after, so two chasers never end up on the same cell.
pub fn advance_chasers(
    walls: &Grid<bool>,
    target: Point,
    chasers: &mut [Point],
    limit: i32,
) -> Result<ChaseTick, FloodError> {
    if !walls.contains(target) {
        return Err(FloodError::OutOfBounds(target));
    }
    if let Some(&c) = chasers.iter().find(|&&c| !walls.contains(c)) {
        return Err(FloodError::OutOfBounds(c));
    }

    let mut input = Grid::new(walls.width(), walls.height(), 1);
    input.set(target, 0);
    let field = dijkstra_map_masked(&input, Some(walls), limit)?;

    let mut obstacles = walls.clone();
    obstacles.set(target, true);
    for &c in chasers.iter() {
        obstacles.set(c, true);
    }

    let mut moved = 0;
    for (i, pos) in chasers.iter_mut().enumerate() {
        obstacles.set(*pos, false);
        let next = chase_step(&field, &obstacles, *pos);
        if next != *pos {
            log::trace!("chaser {i}: {} -> {}", *pos, next);
            *pos = next;
            moved += 1;
        }
        obstacles.set(*pos, true);
    }

    Ok(ChaseTick { field, moved })
}

use floodmap_core::Grid;

use crate::FloodError;
use crate::field::DistanceField;
use crate::flood::{Seed, flood};

/// Compute a Dijkstra map toward every cell of `input` that holds 0.
///
/// Any other value in `input` is an ordinary cell, whatever it encodes for
/// the caller. Non-zero cells of `walls` are impassable. `limit` is the
/// maximum distance the map reports before saturating; 0 means unbounded.
///
/// # Errors
///
/// Returns [`FloodError::DimensionMismatch`] if `walls` is not the size of
/// `input`, [`FloodError::NegativeLimit`] for a negative limit and
/// [`FloodError::EmptyGrid`] for an empty input.
pub fn dijkstra_map(
    input: &Grid<i32>,
    walls: Option<&Grid<i32>>,
    limit: i32,
) -> Result<DistanceField, FloodError> {
    let walls = walls.map(wall_mask);
    dijkstra_map_masked(input, walls.as_ref(), limit)
}

/// Like [`dijkstra_map`], with the walls already given as a boolean mask.
pub fn dijkstra_map_masked(
    input: &Grid<i32>,
    walls: Option<&Grid<bool>>,
    limit: i32,
) -> Result<DistanceField, FloodError> {
    flood(&target_seeds(input), walls, limit)
}

/// Convert a target-encoded grid into flood seeds: 0 is a source.
pub fn target_seeds(input: &Grid<i32>) -> Grid<Seed> {
    input.map(|&v| if v == 0 { Seed::Source } else { Seed::Open })
}

/// Convert an integer wall grid into a mask: non-zero is a wall.
pub fn wall_mask(walls: &Grid<i32>) -> Grid<bool> {
    walls.map(|&v| v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodmap_core::Point;

    #[test]
    fn any_nonzero_code_is_not_a_target() {
        let input = Grid::from_rows(&[[5, 0, -2]]).unwrap();
        let seeds = target_seeds(&input);
        assert_eq!(
            seeds.to_rows(),
            vec![vec![Seed::Open, Seed::Source, Seed::Open]]
        );
    }

    #[test]
    fn any_nonzero_code_is_a_wall() {
        let walls = Grid::from_rows(&[[0, 1, 2, -1]]).unwrap();
        assert_eq!(
            wall_mask(&walls).to_rows(),
            vec![vec![false, true, true, true]]
        );
    }

    #[test]
    fn integer_and_boolean_walls_agree() {
        let input = Grid::from_rows(&[[1, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let walls = Grid::from_rows(&[[0, 0, 7], [0, 0, 7], [0, 0, 0]]).unwrap();
        let a = dijkstra_map(&input, Some(&walls), 0).unwrap();
        let b = dijkstra_map_masked(&input, Some(&wall_mask(&walls)), 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mismatch_is_reported_with_sizes() {
        let input = Grid::new(4, 4, 1);
        let walls = Grid::new(4, 5, 0);
        assert_eq!(
            dijkstra_map(&input, Some(&walls), 0).unwrap_err(),
            FloodError::DimensionMismatch {
                expected: Point::new(4, 4),
                found: Point::new(4, 5),
            }
        );
    }
}

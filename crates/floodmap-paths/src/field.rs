use std::fmt;

use floodmap_core::{Grid, Point};

use crate::FloodError;

/// Distance a chaser must reach before it stops moving: the cell next to a
/// target.
pub const ADJACENT: i32 = 1;

/// How far a flood may propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    /// No cap. Resolved to the grid area, which no shortest path can exceed.
    Unbounded,
    /// Stop after this many layers.
    Capped(i32),
}

impl Limit {
    /// Interpret a raw limit, where 0 means unbounded.
    pub fn from_raw(limit: i32) -> Result<Self, FloodError> {
        match limit {
            l if l < 0 => Err(FloodError::NegativeLimit(l)),
            0 => Ok(Limit::Unbounded),
            l => Ok(Limit::Capped(l)),
        }
    }

    /// The raw form: 0 for unbounded.
    pub fn raw(self) -> i32 {
        match self {
            Limit::Unbounded => 0,
            Limit::Capped(l) => l,
        }
    }

    /// The layer cap to use on a grid of the given size.
    pub fn resolve(self, size: Point) -> i32 {
        match self {
            Limit::Unbounded => size.x.max(0).saturating_mul(size.y.max(0)),
            Limit::Capped(l) => l,
        }
    }
}

/// The result of a flood: for every cell, the step count to the nearest
/// source.
///
/// Sources hold 0. Reached cells hold their shortest 8-connected distance,
/// with cells still pending when the cap is hit holding the cap itself.
/// Walls and cells the flood never reached hold [`saturation`], which is
/// the limit as the caller passed it (0 for an unbounded flood).
///
/// [`saturation`]: DistanceField::saturation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceField {
    grid: Grid<i32>,
    limit: i32,
    saturation: i32,
}

impl DistanceField {
    pub(crate) fn new(grid: Grid<i32>, limit: i32, saturation: i32) -> Self {
        Self {
            grid,
            limit,
            saturation,
        }
    }

    /// The distances as a grid.
    #[inline]
    pub fn grid(&self) -> &Grid<i32> {
        &self.grid
    }

    /// Take ownership of the distance grid.
    pub fn into_grid(self) -> Grid<i32> {
        self.grid
    }

    /// The effective layer cap the flood ran with.
    #[inline]
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Value held by walls and unreached cells.
    #[inline]
    pub fn saturation(&self) -> i32 {
        self.saturation
    }

    /// Distance at `p`, or `None` if `p` is outside the field.
    #[inline]
    pub fn get(&self, p: Point) -> Option<i32> {
        self.grid.at(p).copied()
    }

    /// Size of the field (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.grid.size()
    }

    /// Whether `p` lies inside the field.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.grid.contains(p)
    }

    /// Distances as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.grid.to_rows()
    }
}

impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self.limit.max(self.saturation).to_string().len();
        for row in self.grid.to_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|d| format!("{d:>cell_width$}"))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_from_raw() {
        assert_eq!(Limit::from_raw(0), Ok(Limit::Unbounded));
        assert_eq!(Limit::from_raw(3), Ok(Limit::Capped(3)));
        assert_eq!(Limit::from_raw(-1), Err(FloodError::NegativeLimit(-1)));
        assert_eq!(Limit::Capped(3).raw(), 3);
        assert_eq!(Limit::Unbounded.raw(), 0);
    }

    #[test]
    fn unbounded_resolves_to_area() {
        assert_eq!(Limit::Unbounded.resolve(Point::new(4, 3)), 12);
        assert_eq!(Limit::Capped(2).resolve(Point::new(4, 3)), 2);
        assert_eq!(
            Limit::Unbounded.resolve(Point::new(i32::MAX, 2)),
            i32::MAX
        );
    }

    #[test]
    fn display_pads_columns() {
        let grid = Grid::from_rows(&[[0, 1], [12, 3]]).unwrap();
        let field = DistanceField::new(grid, 12, 12);
        assert_eq!(field.to_string(), " 0  1\n12  3\n");
    }
}

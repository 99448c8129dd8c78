//! A rectangular, row-major grid of values.
//!
//! Unlike a view type, a [`Grid`] owns its storage: cloning copies the cells,
//! and nothing a computation does to its own grids is visible through a grid
//! the caller still holds.

use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors raised when building a [`Grid`] from caller data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have no cells.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// A 2D grid of `T`, stored row-major and indexed by [`Point`]
/// (`x` = column, `y` = row).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone> Grid<T> {
    /// Create a `width` × `height` grid with every cell set to `fill`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![fill; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Build a grid from a list of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            width: expected as i32,
            height: rows.len() as i32,
        })
    }

    /// Copy the grid back out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width as usize)
            .map(|r| r.to_vec())
            .collect()
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `f` on every point in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = Range::new(0, 0, width, height).iter().map(&mut f).collect();
        Self {
            cells,
            width,
            height,
        }
    }

    /// The bounding range, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Point at a flat row-major index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is out
    /// of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// The cells as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// The cells as a flat mutable row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over `(Point, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// Build a same-sized grid by applying `f` to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(&mut f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Whether `other` has the same width and height.
    #[inline]
    pub fn same_size<U>(&self, other: &Grid<U>) -> bool {
        self.size() == other.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5, 0);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 50);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4, 0);
        let p = Point::new(2, 3);
        assert!(g.set(p, 42));
        assert_eq!(g.at(p), Some(&42));
        assert_eq!(g.at(Point::new(0, 0)), Some(&0));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        assert!(!g.set(Point::new(4, 0), 7));
    }

    #[test]
    fn test_from_rows_layout() {
        let g = Grid::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::from_row_col(1, 0)), Some(&4));
        assert_eq!(g.at(Point::from_row_col(0, 2)), Some(&3));
        assert_eq!(g.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let rows: Vec<Vec<i32>> = Vec::new();
        assert_eq!(Grid::from_rows(&rows).unwrap_err(), GridError::Empty);
        let rows: Vec<Vec<i32>> = vec![Vec::new()];
        assert_eq!(Grid::from_rows(&rows).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn test_index_and_point_agree() {
        let g = Grid::new(3, 4, ());
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
    }

    #[test]
    fn test_from_fn_diagonal() {
        let g = Grid::from_fn(4, 3, |p| p.x == p.y);
        assert_eq!(g.iter().filter(|(_, c)| **c).count(), 3);
        assert_eq!(g.at(Point::new(2, 2)), Some(&true));
    }

    #[test]
    fn test_map_keeps_shape() {
        let g = Grid::from_rows(&[[0, 1], [2, 0]]).unwrap();
        let m = g.map(|&v| v != 0);
        assert!(m.same_size(&g));
        assert_eq!(m.to_rows(), vec![vec![false, true], vec![true, false]]);
    }

    #[test]
    fn test_clone_is_independent() {
        let g = Grid::new(2, 2, false);
        let mut h = g.clone();
        h.set(Point::new(1, 1), true);
        assert_eq!(g.at(Point::new(1, 1)), Some(&false));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows(&[[1, 0], [0, 3]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}

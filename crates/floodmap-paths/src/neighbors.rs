use floodmap_core::Point;

/// The eight unit moves, as `(dx, dy)` offsets, in the fixed scan order used
/// by both the flood and the chase step.
///
/// The order walks the west column top to bottom, then the north and south
/// cells of the centre column, then the east column top to bottom. Chasers
/// break ties by taking the first strictly lower cell in this order.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Reusable buffer for enumerating the 8-neighbourhood of a cell.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8 neighbours of `p` in [`DIRECTIONS`] order, keeping only
    /// those for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in DIRECTIONS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

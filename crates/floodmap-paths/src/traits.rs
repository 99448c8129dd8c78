use floodmap_core::{Grid, Point};

use crate::field::DistanceField;

/// Read-only access to distances, as needed by a chaser.
pub trait DistanceView {
    /// Distance at `p`, or `None` if `p` is outside the field.
    fn distance_at(&self, p: Point) -> Option<i32>;
}

/// Read-only obstacle check for the current tick: permanent walls plus
/// whatever occupies cells right now.
pub trait ObstacleView {
    /// Whether `p` cannot be entered. Out-of-bounds points count as blocked.
    fn is_blocked(&self, p: Point) -> bool;
}

impl DistanceView for DistanceField {
    #[inline]
    fn distance_at(&self, p: Point) -> Option<i32> {
        self.get(p)
    }
}

impl ObstacleView for Grid<bool> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.at(p).copied().unwrap_or(true)
    }
}

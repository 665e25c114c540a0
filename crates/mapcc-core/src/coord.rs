//! Grid coordinates
//!
//! Pixels are addressed as `(row, col)`. Ordering is row-major, which is
//! also the scan order used by the labeler.

use std::fmt;

/// A pixel position on a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (0 is the top row)
    pub row: u32,
    /// Column index (0 is the leftmost column)
    pub col: u32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by `(d_row, d_col)` inside a `height x width` grid.
    ///
    /// Returns `None` when the result falls outside `[0, height) x [0, width)`
    /// on either axis. Both the lower and the upper bound are checked, so a
    /// step off the left or top edge never wraps around.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32, height: u32, width: u32) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < height && col < width).then_some(Coord { row, col })
    }

    /// Check whether `other` is one of the eight neighbours of `self`.
    pub fn is_adjacent8(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Check whether `other` is one of the four edge neighbours of `self`.
    pub fn is_adjacent4(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (u32, u32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! The [`GridIndex`] coordinate primitive.
//!
//! Rows grow downward, columns grow rightward. Valid grid coordinates are
//! non-negative; negative values only appear as transient neighbor
//! candidates that bounds checks filter out.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D grid coordinate: `(row, col)` with row growing downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridIndex {
    pub row: i32,
    pub col: i32,
}

impl GridIndex {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new index.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return an index shifted by (d_row, d_col).
    #[inline]
    pub const fn shift(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The four cardinal neighbors, in fixed north/east/south/west order.
    ///
    /// The order is load-bearing: the search expands neighbors in exactly
    /// this sequence, which makes equal-cost tie-breaking deterministic.
    #[inline]
    pub const fn neighbors_4(self) -> [GridIndex; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
        ]
    }
}

impl PartialOrd for GridIndex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridIndex {
    /// Row-major order: by row, then by column.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for GridIndex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for GridIndex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_index_round_trip() {
        let idx = GridIndex::new(3, 7);
        let json = serde_json::to_string(&idx).unwrap();
        let back: GridIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(idx, back);
    }
}

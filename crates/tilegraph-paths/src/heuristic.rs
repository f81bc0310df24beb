//! Distance heuristics toward the goal coordinate.

use tilegraph_core::GridIndex;

/// Manhattan (L1) distance between two indices.
#[inline]
pub fn manhattan(a: GridIndex, b: GridIndex) -> f32 {
    ((a.row - b.row).abs() + (a.col - b.col).abs()) as f32
}

/// Euclidean (L2) distance between two indices.
#[inline]
pub fn euclidean(a: GridIndex, b: GridIndex) -> f32 {
    let dr = (a.row - b.row) as f32;
    let dc = (a.col - b.col) as f32;
    (dr * dr + dc * dc).sqrt()
}

/// Heuristic variant used to estimate remaining distance to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|Δrow| + |Δcol|`.
    Manhattan,
    /// Straight-line distance.
    #[default]
    Euclidean,
}

impl Heuristic {
    /// Estimated distance from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: GridIndex, goal: GridIndex) -> f32 {
        match self {
            Self::Manhattan => manhattan(from, goal),
            Self::Euclidean => euclidean(from, goal),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn heuristic_round_trip() {
        for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let json = serde_json::to_string(&h).unwrap();
            let back: Heuristic = serde_json::from_str(&json).unwrap();
            assert_eq!(h, back);
        }
    }
}

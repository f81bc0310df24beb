//! The movement-cost capability and its uniform default.

use tilegraph_core::TileType;

/// Cost model for stepping between adjacent tiles.
///
/// The cost depends only on the classification of the two tiles involved.
/// Implementations must return a finite, non-negative value.
pub trait MovementCost {
    /// Cost of moving from a tile of type `from` onto an adjacent tile of
    /// type `to`. Must be >= 0 and finite.
    fn cost(&self, from: TileType, to: TileType) -> f32;
}

/// The default cost model: every transition costs exactly `1.0`.
///
/// Stateless and zero-sized; construct it wherever needed rather than
/// sharing a global instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformCost;

impl MovementCost for UniformCost {
    #[inline]
    fn cost(&self, _from: TileType, _to: TileType) -> f32 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_ignores_types() {
        let c = UniformCost;
        assert_eq!(c.cost(TileType::Free, TileType::Free), 1.0);
        assert_eq!(c.cost(TileType::Obstacle, TileType::End), 1.0);
        assert_eq!(c.cost(TileType::Start, TileType::Obstacle), 1.0);
    }
}

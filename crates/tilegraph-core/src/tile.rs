//! [`Tile`] and [`TileType`] — the per-cell values a grid is made of.

use crate::geom::GridIndex;

/// Classification of a tile.
///
/// `Start` and `End` are informational markers for callers that want to
/// highlight the selection; traversal only distinguishes `Obstacle` from
/// everything else.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileType {
    /// Passable terrain.
    #[default]
    Free,
    /// Impassable terrain; the search never expands into it.
    Obstacle,
    /// Marker for the selected start tile.
    Start,
    /// Marker for the selected end tile.
    End,
}

impl TileType {
    /// Whether the search may expand into a tile of this type.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}

/// One cell of a grid.
///
/// A tile is created once at grid construction and never mutated; its
/// identity is its [`GridIndex`]. The `location` payload is opaque to the
/// core — typically a world-space point a renderer draws at — and is
/// carried through into search results unchanged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile<L> {
    index: GridIndex,
    kind: TileType,
    location: L,
}

impl<L> Tile<L> {
    /// Create a new tile.
    pub const fn new(index: GridIndex, kind: TileType, location: L) -> Self {
        Self {
            index,
            kind,
            location,
        }
    }

    /// The tile's grid coordinate.
    #[inline]
    pub const fn index(&self) -> GridIndex {
        self.index
    }

    /// The tile's classification.
    #[inline]
    pub const fn kind(&self) -> TileType {
        self.kind
    }

    /// The opaque location payload.
    #[inline]
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Whether the search may expand into this tile.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }
}

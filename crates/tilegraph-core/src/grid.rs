//! The [`Grid`] type — a fixed-shape 2D array of [`Tile`]s.
//!
//! A grid's shape and per-tile classification are fixed at construction;
//! the only operations afterwards are coordinate-bounded lookup and
//! read-only iteration. Classification is resolved by an external
//! collaborator (e.g. scene sampling) before the grid is built.

use std::fmt;

use crate::geom::GridIndex;
use crate::tile::{Tile, TileType};

/// Errors raised during grid construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A lookup used a coordinate outside `[0, rows) × [0, cols)`.
    OutOfBounds {
        index: GridIndex,
        rows: usize,
        cols: usize,
    },
    /// `from_tiles` received the wrong number of tiles for the shape.
    TileCountMismatch { expected: usize, found: usize },
    /// A tile's own index disagrees with its row-major position.
    MisplacedTile {
        expected: GridIndex,
        found: GridIndex,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, rows, cols } => {
                write!(f, "index {index} outside {rows}x{cols} grid")
            }
            Self::TileCountMismatch { expected, found } => {
                write!(f, "expected {expected} tiles, got {found}")
            }
            Self::MisplacedTile { expected, found } => {
                write!(f, "tile indexed {found} placed at position {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows × cols` grid of [`Tile`]s in row-major storage.
///
/// Generic over the opaque location payload `L` each tile carries.
#[derive(Clone, Debug)]
pub struct Grid<L> {
    tiles: Vec<Tile<L>>,
    rows: usize,
    cols: usize,
}

impl<L> Grid<L> {
    /// Build a grid by invoking `f` once per coordinate in row-major order.
    ///
    /// `f` returns the classification and location payload for each tile;
    /// the grid assigns indices itself, so every tile ends up where its
    /// index says it is.
    pub fn generate(rows: usize, cols: usize, mut f: impl FnMut(GridIndex) -> (TileType, L)) -> Self {
        debug_assert!(
            rows <= i32::MAX as usize && cols <= i32::MAX as usize,
            "grid shape must fit in i32 coordinates"
        );
        let mut tiles = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let index = GridIndex::new(r as i32, c as i32);
                let (kind, location) = f(index);
                tiles.push(Tile::new(index, kind, location));
            }
        }
        Self { tiles, rows, cols }
    }

    /// Build a grid from pre-constructed tiles in row-major order.
    ///
    /// Fails if the tile count does not match `rows * cols`, or if any
    /// tile's index disagrees with its position in the sequence.
    pub fn from_tiles(rows: usize, cols: usize, tiles: Vec<Tile<L>>) -> Result<Self, GridError> {
        if tiles.len() != rows * cols {
            return Err(GridError::TileCountMismatch {
                expected: rows * cols,
                found: tiles.len(),
            });
        }
        for (i, tile) in tiles.iter().enumerate() {
            // tiles is non-empty here, so cols > 0.
            let expected = GridIndex::new((i / cols) as i32, (i % cols) as i32);
            if tile.index() != expected {
                return Err(GridError::MisplacedTile {
                    expected,
                    found: tile.index(),
                });
            }
        }
        Ok(Self { tiles, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Total number of tiles (`rows * cols`).
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether `index` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, index: GridIndex) -> bool {
        index.row >= 0
            && index.col >= 0
            && (index.row as usize) < self.rows
            && (index.col as usize) < self.cols
    }

    /// Flat row-major offset for an in-bounds index.
    #[inline]
    fn offset(&self, index: GridIndex) -> Option<usize> {
        if self.contains(index) {
            Some(index.row as usize * self.cols + index.col as usize)
        } else {
            None
        }
    }

    /// The tile at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: GridIndex) -> Option<&Tile<L>> {
        self.offset(index).map(|i| &self.tiles[i])
    }

    /// The tile at `index`; out-of-bounds coordinates fail fast.
    ///
    /// The grid never clamps or wraps — a bad coordinate is a caller
    /// contract violation.
    pub fn tile(&self, index: GridIndex) -> Result<&Tile<L>, GridError> {
        self.get(index).ok_or(GridError::OutOfBounds {
            index,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// The tile at `(row, col)`; out-of-bounds coordinates fail fast.
    pub fn at(&self, row: i32, col: i32) -> Result<&Tile<L>, GridError> {
        self.tile(GridIndex::new(row, col))
    }

    /// Row-major iterator over all tiles.
    ///
    /// This is the read-only view an external renderer builds its
    /// visualization from.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Tile<L>> {
        self.tiles.iter()
    }
}

impl<'a, L> IntoIterator for &'a Grid<L> {
    type Item = &'a Tile<L>;
    type IntoIter = std::slice::Iter<'a, Tile<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_grid(rows: usize, cols: usize) -> Grid<()> {
        Grid::generate(rows, cols, |_| (TileType::Free, ()))
    }

    #[test]
    fn generate_shape_and_lookup() {
        let g = free_grid(3, 4);
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.col_count(), 4);
        assert_eq!(g.tile_count(), 12);
        assert_eq!(g.at(2, 3).unwrap().index(), GridIndex::new(2, 3));
    }

    #[test]
    fn generate_passes_each_index_once() {
        let mut seen = Vec::new();
        let _ = Grid::generate(2, 2, |idx| {
            seen.push(idx);
            (TileType::Free, ())
        });
        assert_eq!(
            seen,
            vec![
                GridIndex::new(0, 0),
                GridIndex::new(0, 1),
                GridIndex::new(1, 0),
                GridIndex::new(1, 1),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "grid shape must fit in i32 coordinates")]
    fn generate_rejects_shapes_beyond_i32() {
        // Zero rows keep the loop from running; the shape check still
        // fires before any tile is built.
        let _ = Grid::generate(0, i32::MAX as usize + 1, |_| (TileType::Free, ()));
    }

    #[test]
    fn out_of_bounds_fails_fast() {
        let g = free_grid(2, 2);
        assert!(matches!(
            g.tile(GridIndex::new(2, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(g.at(-1, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(g.at(0, 2), Err(GridError::OutOfBounds { .. })));
        assert!(g.get(GridIndex::new(5, 5)).is_none());
    }

    #[test]
    fn contains_bounds() {
        let g = free_grid(2, 3);
        assert!(g.contains(GridIndex::new(0, 0)));
        assert!(g.contains(GridIndex::new(1, 2)));
        assert!(!g.contains(GridIndex::new(2, 0)));
        assert!(!g.contains(GridIndex::new(0, 3)));
        assert!(!g.contains(GridIndex::new(-1, 0)));
    }

    #[test]
    fn from_tiles_valid() {
        let tiles = vec![
            Tile::new(GridIndex::new(0, 0), TileType::Free, ()),
            Tile::new(GridIndex::new(0, 1), TileType::Obstacle, ()),
            Tile::new(GridIndex::new(1, 0), TileType::Free, ()),
            Tile::new(GridIndex::new(1, 1), TileType::Free, ()),
        ];
        let g = Grid::from_tiles(2, 2, tiles).unwrap();
        assert_eq!(g.at(0, 1).unwrap().kind(), TileType::Obstacle);
    }

    #[test]
    fn from_tiles_count_mismatch() {
        let tiles = vec![Tile::new(GridIndex::ZERO, TileType::Free, ())];
        let err = Grid::from_tiles(2, 2, tiles).unwrap_err();
        assert_eq!(
            err,
            GridError::TileCountMismatch {
                expected: 4,
                found: 1
            }
        );
    }

    #[test]
    fn from_tiles_misplaced() {
        let tiles = vec![
            Tile::new(GridIndex::new(0, 0), TileType::Free, ()),
            Tile::new(GridIndex::new(1, 1), TileType::Free, ()),
        ];
        let err = Grid::from_tiles(1, 2, tiles).unwrap_err();
        assert_eq!(
            err,
            GridError::MisplacedTile {
                expected: GridIndex::new(0, 1),
                found: GridIndex::new(1, 1),
            }
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g = free_grid(2, 2);
        let indices: Vec<_> = g.iter().map(Tile::index).collect();
        assert_eq!(
            indices,
            vec![
                GridIndex::new(0, 0),
                GridIndex::new(0, 1),
                GridIndex::new(1, 0),
                GridIndex::new(1, 1),
            ]
        );
    }

    #[test]
    fn display_out_of_bounds() {
        let err = GridError::OutOfBounds {
            index: GridIndex::new(9, 9),
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "index (9, 9) outside 3x3 grid");
    }
}

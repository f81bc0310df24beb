//! Cached neighbor enumeration over a grid.

use tilegraph_core::{Grid, GridIndex};

/// Reusable-buffer helper for cardinal neighbor queries.
///
/// Both views visit candidates in the fixed north/east/south/west order of
/// [`GridIndex::neighbors_4`] and preserve it in the output, which the
/// search relies on for deterministic tie-breaking.
pub struct Neighbors {
    buf: Vec<GridIndex>,
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
            buf: Vec::with_capacity(4),
        }
    }

    /// Cardinal neighbors of `idx` that lie inside the grid.
    pub fn in_bounds<L>(&mut self, grid: &Grid<L>, idx: GridIndex) -> &[GridIndex] {
        self.buf.clear();
        for n in idx.neighbors_4() {
            if grid.contains(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Cardinal neighbors of `idx` that lie inside the grid and are not
    /// classified as obstacles.
    pub fn unobstructed<L>(&mut self, grid: &Grid<L>, idx: GridIndex) -> &[GridIndex] {
        self.buf.clear();
        for n in idx.neighbors_4() {
            if let Some(tile) = grid.get(n) {
                if tile.is_passable() {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

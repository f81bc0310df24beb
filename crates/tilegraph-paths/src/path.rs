//! The [`Path`] result value.

use tilegraph_core::Tile;

/// The outcome of one path search.
///
/// Holds the requested endpoints, the chosen route and the full exploration
/// trace. Immutable once constructed and owned solely by the caller; the
/// engine never caches or retains it.
///
/// `start` and `end` are the tiles that were *requested* — when the goal is
/// unreachable they are not elements of `best_path` (which is then empty).
#[derive(Clone, Debug)]
pub struct Path<L> {
    start: Tile<L>,
    end: Tile<L>,
    best_path: Vec<Tile<L>>,
    explored: Vec<Tile<L>>,
}

impl<L> Path<L> {
    pub(crate) fn new(
        start: Tile<L>,
        end: Tile<L>,
        best_path: Vec<Tile<L>>,
        explored: Vec<Tile<L>>,
    ) -> Self {
        Self {
            start,
            end,
            best_path,
            explored,
        }
    }

    /// The requested start tile.
    #[inline]
    pub fn start(&self) -> &Tile<L> {
        &self.start
    }

    /// The requested end tile.
    #[inline]
    pub fn end(&self) -> &Tile<L> {
        &self.end
    }

    /// The chosen route from start to end; empty if the goal was
    /// unreachable.
    #[inline]
    pub fn best_path(&self) -> &[Tile<L>] {
        &self.best_path
    }

    /// Every tile the search expanded, in pop order. Diagnostic trace for
    /// debug visualization.
    #[inline]
    pub fn explored(&self) -> &[Tile<L>] {
        &self.explored
    }

    /// Whether a route was found.
    #[inline]
    pub fn exists(&self) -> bool {
        !self.best_path.is_empty()
    }
}

/// Structural equality over coordinates: start/end indices match and the
/// best-path indices match element-for-element. The exploration trace and
/// the location payloads are ignored.
impl<L> PartialEq for Path<L> {
    fn eq(&self, other: &Self) -> bool {
        self.start.index() == other.start.index()
            && self.end.index() == other.end.index()
            && self.best_path.len() == other.best_path.len()
            && self
                .best_path
                .iter()
                .zip(&other.best_path)
                .all(|(a, b)| a.index() == b.index())
    }
}

impl<L> Eq for Path<L> {}

//! The [`PathEngine`] — best-first search over a grid.

use std::collections::HashMap;
use std::fmt;

use tilegraph_core::{Grid, GridError, GridIndex, Tile};

use crate::cost::{MovementCost, UniformCost};
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::neighbors::Neighbors;
use crate::path::Path;

/// Errors raised by [`PathEngine`] operations.
///
/// An unreachable goal is *not* an error — it comes back as a [`Path`]
/// with an empty route and `exists() == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// `compute_selected` was called with no start selection.
    UnsetStart,
    /// `compute_selected` was called with no end selection.
    UnsetEnd,
    /// An endpoint lay outside the grid.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsetStart => write!(f, "start tile is expected to be set"),
            Self::UnsetEnd => write!(f, "end tile is expected to be set"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Best-first path search over a borrowed [`Grid`].
///
/// Holds the current start/end selection and the two pluggable strategies:
/// a [`MovementCost`] model (default [`UniformCost`]) and a [`Heuristic`]
/// (default [`Heuristic::Euclidean`]). All search state lives inside a
/// single [`compute_path`](PathEngine::compute_path) call, so one grid may
/// back any number of engines and concurrent searches.
pub struct PathEngine<'g, L, C = UniformCost> {
    grid: &'g Grid<L>,
    start: Option<GridIndex>,
    end: Option<GridIndex>,
    cost: C,
    heuristic: Heuristic,
}

impl<'g, L> PathEngine<'g, L> {
    /// Create an engine with uniform movement cost and the default
    /// (Euclidean) heuristic.
    pub fn new(grid: &'g Grid<L>) -> Self {
        Self::with_cost(grid, UniformCost)
    }
}

impl<'g, L, C> PathEngine<'g, L, C> {
    /// Create an engine with a caller-supplied movement-cost strategy.
    pub fn with_cost(grid: &'g Grid<L>, cost: C) -> Self {
        Self {
            grid,
            start: None,
            end: None,
            cost,
            heuristic: Heuristic::default(),
        }
    }

    /// The grid this engine searches.
    #[inline]
    pub fn grid(&self) -> &'g Grid<L> {
        self.grid
    }

    /// Select the start coordinate. Not validated here; a bad coordinate
    /// fails at search time.
    pub fn set_start(&mut self, start: GridIndex) {
        self.start = Some(start);
    }

    /// Select the end coordinate. Not validated here; a bad coordinate
    /// fails at search time.
    pub fn set_end(&mut self, end: GridIndex) {
        self.end = Some(end);
    }

    /// Clear both endpoint selections.
    pub fn clear_selection(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// The current start selection, if any.
    #[inline]
    pub fn start(&self) -> Option<GridIndex> {
        self.start
    }

    /// The current end selection, if any.
    #[inline]
    pub fn end(&self) -> Option<GridIndex> {
        self.end
    }

    /// Choose the heuristic variant.
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// The configured heuristic variant.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl<L: Clone, C: MovementCost> PathEngine<'_, L, C> {
    /// Search from `from` to `to` and return the resulting [`Path`].
    ///
    /// The search pops the lowest accumulated priority first, breaking ties
    /// within a priority bucket in FIFO discovery order, and expands
    /// unobstructed neighbors in fixed north/east/south/west order. A
    /// coordinate is admitted to the frontier at most once (first visit
    /// wins); there is no re-opening or cost relaxation.
    ///
    /// The heuristic term is folded into the accumulated priority at every
    /// expansion — `priority(nbr) = priority(cur) + step + estimate(nbr)` —
    /// so each hop's estimate carries forward into all downstream
    /// priorities. The returned route is therefore best-effort, not
    /// guaranteed cost-optimal.
    ///
    /// An out-of-bounds endpoint is a hard error; an unreachable goal is a
    /// normal result with an empty route.
    pub fn compute_path(&self, from: GridIndex, to: GridIndex) -> Result<Path<L>, PathError> {
        let grid = self.grid;
        let start_tile = grid.tile(from)?.clone();
        let end_tile = grid.tile(to)?.clone();

        // `came_from` doubles as the visited set: a key is present exactly
        // when the coordinate has been admitted to the frontier, and the
        // search root maps to None.
        let mut came_from: HashMap<GridIndex, Option<GridIndex>> = HashMap::new();
        let mut frontier = Frontier::new();
        let mut neighbors = Neighbors::new();
        let mut explored: Vec<Tile<L>> = Vec::new();

        frontier.push(0.0, from);
        came_from.insert(from, None);

        while let Some((cur_priority, cur)) = frontier.pop() {
            let cur_tile = grid.tile(cur)?;
            explored.push(cur_tile.clone());
            if cur == to {
                break;
            }

            let cur_kind = cur_tile.kind();
            for &nbr in neighbors.unobstructed(grid, cur) {
                if came_from.contains_key(&nbr) {
                    continue;
                }
                let step = self.cost.cost(cur_kind, grid.tile(nbr)?.kind());
                debug_assert!(
                    step >= 0.0 && step.is_finite(),
                    "movement cost must be non-negative and finite"
                );
                let priority = cur_priority + step + self.heuristic.estimate(nbr, to);
                frontier.push(priority, nbr);
                came_from.insert(nbr, Some(cur));
            }
        }

        let mut best_path = Vec::new();
        if came_from.contains_key(&to) {
            let mut cursor = Some(to);
            while let Some(idx) = cursor {
                best_path.push(grid.tile(idx)?.clone());
                cursor = came_from[&idx];
            }
            best_path.reverse();
        }

        Ok(Path::new(start_tile, end_tile, best_path, explored))
    }

    /// Search between the stored start/end selection.
    ///
    /// Fails fast with [`PathError::UnsetStart`] or [`PathError::UnsetEnd`]
    /// if either endpoint has not been selected.
    pub fn compute_selected(&self) -> Result<Path<L>, PathError> {
        let from = self.start.ok_or(PathError::UnsetStart)?;
        let to = self.end.ok_or(PathError::UnsetEnd)?;
        self.compute_path(from, to)
    }
}

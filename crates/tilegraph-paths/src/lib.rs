//! Best-first path search over tilegraph grids.
//!
//! This crate implements the search half of the *tilegraph* workspace:
//!
//! - **[`PathEngine`]** — cost-driven best-first search with deterministic
//!   tie-breaking ([`PathEngine::compute_path`])
//! - **[`Path`]** — the result value: best route plus full exploration trace
//! - **[`MovementCost`]** / [`UniformCost`] — pluggable tile-transition cost
//! - **[`Heuristic`]** — Manhattan or Euclidean goal-distance estimation
//! - **[`Neighbors`]** — cardinal neighbor enumeration with bounds and
//!   obstacle filtering
//!
//! The engine borrows an immutable [`tilegraph_core::Grid`]; all search
//! state is local to a single query, so one grid can serve any number of
//! engines and concurrent searches.

mod cost;
mod engine;
mod frontier;
mod heuristic;
mod neighbors;
mod path;

pub use cost::{MovementCost, UniformCost};
pub use engine::{PathEngine, PathError};
pub use heuristic::{Heuristic, euclidean, manhattan};
pub use neighbors::Neighbors;
pub use path::Path;

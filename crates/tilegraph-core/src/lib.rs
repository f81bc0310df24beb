//! **tilegraph-core** — Grid and tile model for the *tilegraph* path
//! search engine (core types).
//!
//! This crate provides the foundational types used across the tilegraph
//! workspace: the [`GridIndex`] coordinate primitive, per-cell [`Tile`]
//! values with a free/obstacle classification and an opaque location
//! payload, and the fixed-shape [`Grid`] with fail-fast bounded lookup.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::GridIndex;
pub use grid::{Grid, GridError};
pub use tile::{Tile, TileType};

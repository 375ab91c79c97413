//! Tile-grid scene engine for a 2D level editor
//!
//! Stores placed tiles on a three-layer grid, answers per-cell queries and
//! keeps terrain autotiled as tiles are added and removed. Scenes load from
//! and save to per-kind comma-separated layout grids.

#![forbid(unsafe_code)]

/// Terrain autotiling from four-neighbor masks
pub mod autotile;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile kinds, tile records and render geometry
pub mod model;
/// Editor-facing scene store
pub mod scene;
/// Tile storage, spatial index and layer partition
pub mod spatial;

pub use io::error::{Result, SceneError};
pub use io::layout::{Layout, LayoutLocation};
pub use model::{GridPos, Tile, TileKind};
pub use scene::SceneStore;
pub use spatial::{Layer, TileId};

//! Spatial data structures for placed tiles
//!
//! This module contains spatial-related functionality including:
//! - Generational tile storage
//! - Cell-keyed lookup of the tiles occupying a grid cell
//! - Per-kind catalogs and the fixed layer partition
//! - The store that keeps all of the above consistent

/// Generational slot arena owning tiles
pub mod arena;
/// Per-kind ordered tile sequences
pub mod catalog;
/// Hash index from grid cells to tile ids
pub mod index;
/// Fixed three-layer partition of tile kinds
pub mod layers;
/// Consistent storage combining arena, catalog and index
pub mod store;

pub use arena::TileId;
pub use index::{CellKey, SpatialIndex};
pub use layers::Layer;
pub use store::TileStore;

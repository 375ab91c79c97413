//! Tile data model
//!
//! This module contains the static description of placed tiles:
//! - The closed set of tile kinds and their properties
//! - Tile records and grid coordinates
//! - Render geometry derived on demand for an external renderer

/// Tile kinds, draw modes and file naming
pub mod kind;
/// On-demand render geometry and the resource provider seam
pub mod render;
/// Tile records and grid positions
pub mod tile;

pub use kind::{Drawing, TileKind};
pub use tile::{GridPos, Tile};

//! Terrain autotiling
//!
//! Picks each terrain tile's sheet variant from its 4-connected terrain
//! neighbors so adjacent tiles draw as one connected, capped shape.

/// Recalculation over a tile store
pub mod engine;
/// Four-neighbor occupancy masks
pub mod mask;
/// Variant table and override rules
pub mod rules;

pub use engine::AutotileEngine;
pub use mask::NeighborMask;

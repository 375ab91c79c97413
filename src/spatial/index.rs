//! Hash index from grid cells to the tiles occupying them
//!
//! Each cell bucket lists tile ids in insertion order. Several tiles may share
//! a cell when they belong to different kinds, e.g. a background palm behind a
//! terrain tile. The index never owns tiles and never touches the catalog;
//! keeping both in step is [`crate::spatial::store::TileStore`]'s job.

use std::collections::HashMap;
use std::fmt;

use crate::model::kind::TileKind;
use crate::model::tile::GridPos;
use crate::spatial::arena::TileId;

/// Collision-free 64-bit key of a grid cell
///
/// `x` fills the high 32 bits and `y` the low 32 bits, both as raw two's
/// complement, so every pair of `i32` coordinates maps to a distinct key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(u64);

impl CellKey {
    /// Pack a coordinate pair
    pub const fn new(x: i32, y: i32) -> Self {
        Self(((x as u32 as u64) << 32) | (y as u32 as u64))
    }

    /// Packed value
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Column encoded in the key
    pub const fn x(self) -> i32 {
        (self.0 >> 32) as u32 as i32
    }

    /// Row encoded in the key
    pub const fn y(self) -> i32 {
        self.0 as u32 as i32
    }

    /// Decode back into a grid position
    pub const fn position(self) -> GridPos {
        GridPos::new(self.x(), self.y())
    }
}

impl From<GridPos> for CellKey {
    fn from(position: GridPos) -> Self {
        position.key()
    }
}

/// One bucket entry: a tile id and its (immutable) kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellEntry {
    /// Tile handle
    pub id: TileId,
    /// Kind of the tile, cached for type-filtered lookups
    pub kind: TileKind,
}

/// Spatial hash of tile references
#[derive(Clone, Default)]
pub struct SpatialIndex {
    cells: HashMap<CellKey, Vec<CellEntry>>,
    entries: usize,
}

impl fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("cells", &self.cells.len())
            .field("entries", &self.entries)
            .finish()
    }
}

impl SpatialIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of a cell
    pub const fn key(x: i32, y: i32) -> CellKey {
        CellKey::new(x, y)
    }

    /// Append a tile to the bucket of `position`
    ///
    /// Never replaces: stacked tiles accumulate in insertion order.
    pub fn insert(&mut self, position: GridPos, id: TileId, kind: TileKind) {
        self.cells
            .entry(position.key())
            .or_default()
            .push(CellEntry { id, kind });
        self.entries += 1;
    }

    /// Remove every entry at `position` matching `predicate`
    ///
    /// Returns the removed entries in bucket order. A bucket left empty is
    /// dropped from the map.
    pub fn remove_where<F>(&mut self, position: GridPos, mut predicate: F) -> Vec<CellEntry>
    where
        F: FnMut(&CellEntry) -> bool,
    {
        let key = position.key();
        let Some(bucket) = self.cells.get_mut(&key) else {
            return Vec::new();
        };

        let mut removed = Vec::new();
        bucket.retain(|entry| {
            if predicate(entry) {
                removed.push(*entry);
                false
            } else {
                true
            }
        });

        if bucket.is_empty() {
            self.cells.remove(&key);
        }
        self.entries -= removed.len();
        removed
    }

    /// All entries at `position`, oldest first
    pub fn at(&self, position: GridPos) -> &[CellEntry] {
        self.cells
            .get(&position.key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First-inserted tile at `position`
    pub fn lookup_any(&self, position: GridPos) -> Option<TileId> {
        self.at(position).first().map(|entry| entry.id)
    }

    /// First tile of `kind` at `position`
    pub fn lookup_of_type(&self, position: GridPos, kind: TileKind) -> Option<TileId> {
        self.at(position)
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.id)
    }

    /// Check whether `position` holds a tile of `kind`
    pub fn contains_kind(&self, position: GridPos, kind: TileKind) -> bool {
        self.lookup_of_type(position, kind).is_some()
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of tile references across all cells
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// True when no cell holds a tile
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.cells.clear();
        self.entries = 0;
    }

    /// Iterate non-empty cells and their buckets, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, &[CellEntry])> {
        self.cells
            .iter()
            .map(|(key, bucket)| (key.position(), bucket.as_slice()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/index.rs"]
mod tests;

//! Tile storage keeping the arena, catalog and spatial index in step
//!
//! Every tile lives in the arena, is listed once in its kind's catalog
//! sequence and is referenced once from the index bucket of its cell. All
//! mutation goes through [`TileStore`], which updates the three together.

use std::collections::HashSet;

use crate::io::error::{Result, SceneError};
use crate::model::kind::TileKind;
use crate::model::tile::{GridPos, Tile};
use crate::spatial::arena::{TileArena, TileId};
use crate::spatial::catalog::TileCatalog;
use crate::spatial::index::SpatialIndex;
use crate::spatial::layers::Layer;

/// Owner of all placed tiles
#[derive(Debug, Clone, Default)]
pub struct TileStore {
    arena: TileArena,
    catalog: TileCatalog,
    index: SpatialIndex,
}

impl TileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to its kind's sequence and to the index
    ///
    /// Does not check for another tile of the same kind in the cell.
    pub fn insert(&mut self, tile: Tile) -> TileId {
        let kind = tile.kind();
        let position = tile.position();
        let id = self.arena.insert(tile);
        self.catalog.push(kind, id);
        self.index.insert(position, id, kind);
        id
    }

    /// Remove every tile at `position` whose kind belongs to `layer`
    ///
    /// Each removed tile is unlinked from index and catalog and dropped from
    /// the arena before the next one is touched. Returns the removed tiles.
    pub fn remove_in_layer(&mut self, position: GridPos, layer: Layer) -> Vec<Tile> {
        self.remove_matching(position, |kind| layer.contains(kind))
    }

    /// Remove every tile at `position` whose kind satisfies `predicate`
    pub fn remove_matching<F>(&mut self, position: GridPos, mut predicate: F) -> Vec<Tile>
    where
        F: FnMut(TileKind) -> bool,
    {
        self.index
            .remove_where(position, |entry| predicate(entry.kind))
            .into_iter()
            .filter_map(|entry| {
                self.catalog.remove(entry.kind, entry.id);
                self.arena.remove(entry.id)
            })
            .collect()
    }

    /// Remove one tile by id
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let tile = *self.arena.get(id)?;
        self.index.remove_where(tile.position(), |entry| entry.id == id);
        self.catalog.remove(tile.kind(), id);
        self.arena.remove(id)
    }

    /// Drop every tile
    pub fn clear(&mut self) {
        self.arena.clear();
        self.catalog.clear();
        self.index.clear();
    }

    /// Borrow a live tile
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.arena.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.arena.get_mut(id)
    }

    /// First-inserted tile id at `position`
    pub fn lookup_any(&self, position: GridPos) -> Option<TileId> {
        self.index.lookup_any(position)
    }

    /// First tile id of `kind` at `position`
    pub fn lookup_of_type(&self, position: GridPos, kind: TileKind) -> Option<TileId> {
        self.index.lookup_of_type(position, kind)
    }

    /// Check whether `position` holds a tile of `kind`
    pub fn has_kind_at(&self, position: GridPos, kind: TileKind) -> bool {
        self.index.contains_kind(position, kind)
    }

    /// Ids of one kind, in insertion order
    pub fn ids_of(&self, kind: TileKind) -> &[TileId] {
        self.catalog.of_kind(kind)
    }

    /// Tiles of one kind, in insertion order
    pub fn tiles_of(&self, kind: TileKind) -> impl Iterator<Item = &Tile> {
        self.ids_of(kind).iter().filter_map(|&id| self.arena.get(id))
    }

    /// Tiles of the given kinds, kind by kind
    pub fn tiles_of_kinds<'a>(
        &'a self,
        kinds: &'a [TileKind],
    ) -> impl Iterator<Item = &'a Tile> + 'a {
        self.catalog
            .iter_kinds(kinds)
            .filter_map(|(_, id)| self.arena.get(id))
    }

    /// Number of tiles of one kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.catalog.count(kind)
    }

    /// Number of tiles across all kinds
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when no tile is stored
    pub const fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Read-only view of the spatial index
    pub const fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Read-only view of the catalog
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Check that catalog and index describe exactly the same tiles
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::IndexMismatch`] naming the first disagreement:
    /// a catalog id with no live tile, a tile listed under the wrong kind, a
    /// tile not referenced exactly once from its cell, or an index entry with
    /// no catalog counterpart.
    pub fn verify(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for kind in TileKind::ALL {
            for &id in self.catalog.of_kind(kind) {
                let Some(tile) = self.arena.get(id) else {
                    return Err(mismatch(GridPos::default(), format!("{id} listed but dead")));
                };
                let position = tile.position();
                if tile.kind() != kind {
                    return Err(mismatch(
                        position,
                        format!("{id} is {} but listed as {kind}", tile.kind()),
                    ));
                }
                if !seen.insert(id) {
                    return Err(mismatch(position, format!("{id} listed twice")));
                }
                let references = self
                    .index
                    .at(position)
                    .iter()
                    .filter(|entry| entry.id == id)
                    .count();
                if references != 1 {
                    return Err(mismatch(
                        position,
                        format!("{id} referenced {references} times from its cell"),
                    ));
                }
            }
        }

        for (position, bucket) in self.index.cells() {
            for entry in bucket {
                if !seen.contains(&entry.id) {
                    return Err(mismatch(
                        position,
                        format!("{} indexed but not in the catalog", entry.id),
                    ));
                }
            }
        }

        if self.index.len() != seen.len() || self.arena.len() != seen.len() {
            return Err(mismatch(
                GridPos::default(),
                format!(
                    "{} catalog ids, {} index entries, {} live tiles",
                    seen.len(),
                    self.index.len(),
                    self.arena.len()
                ),
            ));
        }

        Ok(())
    }
}

fn mismatch(position: GridPos, reason: String) -> SceneError {
    SceneError::IndexMismatch {
        position: [position.x, position.y],
        reason,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/store.rs"]
mod tests;

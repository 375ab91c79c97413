//! Per-kind ordered collections of placed tiles

use crate::model::kind::TileKind;
use crate::spatial::arena::TileId;

/// One append-only sequence of tile ids per kind
///
/// Order inside a sequence is paint order within its layer and otherwise
/// carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    groups: [Vec<TileId>; TileKind::COUNT],
}

impl TileCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tile to its kind's sequence
    pub fn push(&mut self, kind: TileKind, id: TileId) {
        if let Some(group) = self.groups.get_mut(kind.index()) {
            group.push(id);
        }
    }

    /// Remove a tile from its kind's sequence, keeping the order of the rest
    pub fn remove(&mut self, kind: TileKind, id: TileId) -> bool {
        let Some(group) = self.groups.get_mut(kind.index()) else {
            return false;
        };
        match group.iter().position(|&candidate| candidate == id) {
            Some(offset) => {
                group.remove(offset);
                true
            }
            None => false,
        }
    }

    /// Tile ids of one kind, in insertion order
    pub fn of_kind(&self, kind: TileKind) -> &[TileId] {
        self.groups
            .get(kind.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of tiles of one kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.of_kind(kind).len()
    }

    /// Number of tiles across all kinds
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Drop every id
    pub fn clear(&mut self) {
        self.groups.iter_mut().for_each(Vec::clear);
    }

    /// Iterate `(kind, id)` over the given kinds, group by group
    pub fn iter_kinds<'a>(
        &'a self,
        kinds: &'a [TileKind],
    ) -> impl Iterator<Item = (TileKind, TileId)> + 'a {
        kinds
            .iter()
            .flat_map(move |&kind| self.of_kind(kind).iter().map(move |&id| (kind, id)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/catalog.rs"]
mod tests;

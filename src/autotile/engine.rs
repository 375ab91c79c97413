//! Recomputes autotiled variants after topology changes
//!
//! A variant depends only on which neighbor cells hold the autotiled kind,
//! never on the neighbors' own variants, so recomputation order does not
//! matter and repeated passes are stable.

use log::trace;

use crate::autotile::mask::NeighborMask;
use crate::autotile::rules::resolve_variant;
use crate::model::kind::TileKind;
use crate::model::tile::{GridPos, Tile};
use crate::spatial::arena::TileId;
use crate::spatial::store::TileStore;

/// Assigns connected-shape variants to one tile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutotileEngine {
    kind: TileKind,
}

impl Default for AutotileEngine {
    fn default() -> Self {
        Self::terrain()
    }
}

impl AutotileEngine {
    /// Engine autotiling `kind`
    pub const fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    /// Engine autotiling terrain
    pub const fn terrain() -> Self {
        Self::new(TileKind::Terrain)
    }

    /// Kind this engine autotiles
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Neighbor mask of a cell with respect to this engine's kind
    pub fn neighbor_mask(&self, store: &TileStore, position: GridPos) -> NeighborMask {
        NeighborMask::probe(position, |neighbor| store.has_kind_at(neighbor, self.kind))
    }

    /// Variant the tile at `position` should show, `None` if there is none
    pub fn variant_at(&self, store: &TileStore, position: GridPos) -> Option<u32> {
        store
            .has_kind_at(position, self.kind)
            .then(|| resolve_variant(self.neighbor_mask(store, position)))
    }

    /// Recompute one cell
    ///
    /// Silent no-op when the cell holds no tile of this kind. Returns whether
    /// a tile was updated.
    pub fn recalc_at(&self, store: &mut TileStore, position: GridPos) -> bool {
        let Some(id) = store.lookup_of_type(position, self.kind) else {
            return false;
        };
        let variant = resolve_variant(self.neighbor_mask(store, position));
        Self::apply(store, id, variant)
    }

    /// Recompute a cell and its four neighbors
    ///
    /// Run after any insert or removal of this kind at `position`. Returns
    /// the number of tiles updated.
    pub fn recalc_neighborhood(&self, store: &mut TileStore, position: GridPos) -> usize {
        let updated = NeighborMask::neighborhood(position)
            .filter(|&cell| self.recalc_at(store, cell))
            .count();
        trace!("Autotiled {updated} tile(s) around {position}");
        updated
    }

    /// Recompute every tile of this kind
    ///
    /// Returns the number of tiles updated.
    pub fn recalc_all(&self, store: &mut TileStore) -> usize {
        let ids: Vec<TileId> = store.ids_of(self.kind).to_vec();
        let mut updated = 0;
        for id in ids {
            let Some(position) = store.get(id).map(Tile::position) else {
                continue;
            };
            let variant = resolve_variant(self.neighbor_mask(store, position));
            if Self::apply(store, id, variant) {
                updated += 1;
            }
        }
        trace!("Autotiled all {updated} {} tile(s)", self.kind);
        updated
    }

    fn apply(store: &mut TileStore, id: TileId, variant: u32) -> bool {
        store.get_mut(id).is_some_and(|tile| {
            tile.set_variant(variant);
            true
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/autotile/engine.rs"]
mod tests;

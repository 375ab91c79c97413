//! Generational slot storage owning every placed tile
//!
//! Catalog and index hold [`TileId`]s instead of references. Removing a tile
//! bumps its slot generation, so an id kept past removal resolves to `None`
//! rather than to whatever tile reuses the slot.

use std::fmt;

use crate::model::tile::Tile;

/// Stable handle of a tile in a [`TileArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    index: u32,
    generation: u32,
}

impl TileId {
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Slot generation at the time the id was issued
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Slot arena of tiles
#[derive(Clone, Default)]
pub struct TileArena {
    slots: Vec<Option<Tile>>,
    // Last generation per slot, kept across frees
    generations: Vec<u32>,
    free_list: Vec<usize>,
    len: usize,
}

impl fmt::Debug for TileArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileArena")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("free", &self.free_list.len())
            .finish()
    }
}

impl TileArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a tile and return its id
    pub fn insert(&mut self, tile: Tile) -> TileId {
        self.len += 1;
        if let Some(index) = self.free_list.pop() {
            if let (Some(slot), Some(generation)) =
                (self.slots.get_mut(index), self.generations.get_mut(index))
            {
                *generation = generation.saturating_add(1);
                *slot = Some(tile);
                return TileId::new(index as u32, *generation);
            }
        }

        let generation = 1_u32;
        self.slots.push(Some(tile));
        self.generations.push(generation);
        TileId::new((self.slots.len() - 1) as u32, generation)
    }

    /// Remove a tile, returning it if the id was still alive
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        if !self.is_alive(id) {
            return None;
        }
        let tile = self.slots.get_mut(id.index()).and_then(Option::take)?;
        self.free_list.push(id.index());
        self.len -= 1;
        Some(tile)
    }

    /// Check that `id` refers to a tile that has not been removed
    pub fn is_alive(&self, id: TileId) -> bool {
        self.generations.get(id.index()) == Some(&id.generation)
            && self.slots.get(id.index()).is_some_and(Option::is_some)
    }

    /// Borrow a live tile
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Mutably borrow a live tile
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        if self.generations.get(id.index()) != Some(&id.generation) {
            return None;
        }
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of live tiles
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no tile is alive
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every tile
    ///
    /// Generations survive, so ids issued before the clear stay dead.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = None;
            self.free_list.push(index);
        }
        self.len = 0;
    }

    /// Iterate live tiles with their ids, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.slots
            .iter()
            .zip(&self.generations)
            .enumerate()
            .filter_map(|(index, (slot, &generation))| {
                slot.as_ref()
                    .map(|tile| (TileId::new(index as u32, generation), tile))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/arena.rs"]
mod tests;

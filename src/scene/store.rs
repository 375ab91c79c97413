//! The editing entry point over placed tiles
//!
//! [`SceneStore`] owns every tile of a scene and is the only way the editor
//! loads, mutates, queries and saves them. Each mutation keeps the catalog,
//! the spatial index and the terrain variants consistent before returning.

use log::{debug, info, warn};
use ndarray::Array2;

use crate::autotile::engine::AutotileEngine;
use crate::io::configuration::{EMPTY_CELL, SaveBounds};
use crate::io::layout::Layout;
use crate::model::kind::TileKind;
use crate::model::render::{Camera, DrawCommand, LayerFocus, ResourceProvider, draw_command};
use crate::model::tile::{GridPos, Tile};
use crate::spatial::arena::TileId;
use crate::spatial::layers::Layer;
use crate::spatial::store::TileStore;

/// Lifecycle state of a scene store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneState {
    /// Constructed, no layout loaded yet
    #[default]
    Empty,
    /// Tiles populated from a layout
    Loaded,
}

/// Tiles of one scene, with autotiling applied on every terrain change
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    tiles: TileStore,
    autotile: AutotileEngine,
    bounds: SaveBounds,
    state: SceneState,
}

impl SceneStore {
    /// Empty store saving to the default canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store saving to a canvas of the given size
    pub fn with_bounds(bounds: SaveBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SceneState {
        self.state
    }

    /// Canvas used by [`SceneStore::serialize`]
    pub const fn bounds(&self) -> SaveBounds {
        self.bounds
    }

    /// Read-only access to the underlying storage
    pub const fn tiles(&self) -> &TileStore {
        &self.tiles
    }

    /// Populate the store from a layout, then autotile all terrain
    ///
    /// Any tiles already present are dropped first. A kind whose grid is
    /// empty contributes no tiles. Returns the number of tiles placed.
    pub fn load_from_layout(&mut self, layout: &Layout) -> usize {
        self.tiles.clear();

        for kind in TileKind::ALL {
            let placed = self.load_grid(layout, kind);
            if placed == 0 {
                debug!("No {kind} tiles in layout");
            }
        }

        let retiled = self.autotile.recalc_all(&mut self.tiles);
        self.state = SceneState::Loaded;
        info!(
            "Loaded {} tile(s), autotiled {retiled} terrain tile(s)",
            self.tiles.len()
        );
        self.tiles.len()
    }

    fn load_grid(&mut self, layout: &Layout, kind: TileKind) -> usize {
        let mut placed = 0;
        for (y, row) in layout.grid(kind).iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == EMPTY_CELL {
                    continue;
                }
                let Ok(variant) = u32::try_from(value) else {
                    warn!("Ignoring {kind} cell ({x}, {y}) with negative value {value}");
                    continue;
                };
                let (Ok(gx), Ok(gy)) = (i32::try_from(x), i32::try_from(y)) else {
                    warn!("Ignoring {kind} cell ({x}, {y}) outside the grid range");
                    continue;
                };
                self.tiles.insert(Tile::new(kind, GridPos::new(gx, gy), variant));
                placed += 1;
            }
        }
        placed
    }

    /// Drop every tile and rebuild from `layout`
    ///
    /// Returns the number of tiles placed. A layout without terrain is
    /// accepted as a fresh scene.
    pub fn replace_scene(&mut self, layout: &Layout) -> usize {
        self.tiles.clear();
        if layout.grid(TileKind::Terrain).is_empty() {
            warn!("Scene has no terrain, initialising as a new scene");
        }
        self.load_from_layout(layout)
    }

    /// Place a tile on the layer with index `layer_index`
    ///
    /// Returns `None` without touching the store when the index is not 0, 1
    /// or 2. Another tile of the same kind in the cell is not replaced;
    /// callers check [`SceneStore::lookup_of_type`] first when they want to
    /// overwrite. Placing terrain re-autotiles the cell and its neighbors.
    pub fn add_tile(&mut self, tile: Tile, layer_index: usize) -> Option<TileId> {
        let layer = Layer::from_index(layer_index)?;
        let id = self.tiles.insert(tile);
        debug!(
            "Added {} at {} on {layer} layer as {id}",
            tile.kind(),
            tile.position()
        );

        if tile.kind() == self.autotile.kind() {
            self.autotile.recalc_neighborhood(&mut self.tiles, tile.position());
        }
        Some(id)
    }

    /// Remove every tile of layer `layer_index` at `position`
    ///
    /// Out-of-range layer indices are ignored. Removing terrain re-autotiles
    /// the neighbors. Returns the number of tiles removed.
    pub fn remove_at(&mut self, position: GridPos, layer_index: usize) -> usize {
        let Some(layer) = Layer::from_index(layer_index) else {
            return 0;
        };

        let autotiled = self.autotile.kind();
        let had_autotiled = self.tiles.has_kind_at(position, autotiled);
        let removed = self.tiles.remove_in_layer(position, layer);

        if had_autotiled && removed.iter().any(|tile| tile.kind() == autotiled) {
            self.autotile.recalc_neighborhood(&mut self.tiles, position);
        }
        if !removed.is_empty() {
            debug!("Removed {} tile(s) at {position} from {layer} layer", removed.len());
        }
        removed.len()
    }

    /// First-placed tile at `position`, whatever its kind
    pub fn query_at(&self, position: GridPos) -> Option<&Tile> {
        self.tiles
            .lookup_any(position)
            .and_then(|id| self.tiles.get(id))
    }

    /// Id of the first tile of `kind` at `position`
    pub fn lookup_of_type(&self, position: GridPos, kind: TileKind) -> Option<TileId> {
        self.tiles.lookup_of_type(position, kind)
    }

    /// Check whether `position` holds a tile of `kind`
    pub fn has_tile_of_type(&self, position: GridPos, kind: TileKind) -> bool {
        self.tiles.has_kind_at(position, kind)
    }

    /// Borrow a tile by id; stale ids resolve to `None`
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Number of tiles of one kind
    pub fn tile_count(&self, kind: TileKind) -> usize {
        self.tiles.count(kind)
    }

    /// Number of tiles of all kinds
    pub const fn total_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles of one kind in placement order
    pub fn tiles_of(&self, kind: TileKind) -> impl Iterator<Item = &Tile> {
        self.tiles.tiles_of(kind)
    }

    /// Tiles of one layer, kind by kind
    pub fn tiles_in_layer(&self, layer: Layer) -> impl Iterator<Item = &Tile> {
        self.tiles.tiles_of_kinds(layer.kinds())
    }

    /// Grid size `(columns, rows)` spanned from the origin to the furthest tile
    ///
    /// `(0, 0)` for an empty scene.
    pub fn extent(&self) -> (usize, usize) {
        TileKind::ALL
            .iter()
            .flat_map(|&kind| self.tiles.tiles_of(kind))
            .map(Tile::position)
            .fold((0, 0), |(columns, rows), position| {
                (columns.max(span(position.x)), rows.max(span(position.y)))
            })
    }

    /// Layout of the scene on the configured canvas
    ///
    /// Every grid is exactly `bounds.height` rows of `bounds.width` cells.
    /// Tiles outside the canvas, and tiles whose variant does not fit a cell
    /// value, are left out.
    pub fn serialize(&self) -> Layout {
        let SaveBounds { width, height } = self.bounds;
        let mut layout = Layout::new();
        let mut dropped = 0;
        let mut oversized = 0;

        for kind in TileKind::ALL {
            let mut grid = Array2::from_elem((height, width), EMPTY_CELL);
            for tile in self.tiles.tiles_of(kind) {
                let GridPos { x, y } = tile.position();
                if !self.bounds.contains(x, y) {
                    dropped += 1;
                    continue;
                }
                let Ok(value) = i32::try_from(tile.variant()) else {
                    oversized += 1;
                    continue;
                };
                if let Some(cell) = grid.get_mut((y as usize, x as usize)) {
                    *cell = value;
                }
            }
            layout.set_grid(kind, grid.outer_iter().map(|row| row.to_vec()).collect());
        }

        if dropped > 0 {
            warn!("Left {dropped} tile(s) outside the {width}x{height} canvas out of the save");
        }
        if oversized > 0 {
            warn!("Left {oversized} tile(s) with a variant above {} out of the save", i32::MAX);
        }
        layout
    }

    /// Draw commands for every tile, in paint order
    ///
    /// With [`LayerFocus::Only`] tiles are emitted layer by layer and all but
    /// the focused layer are faded. Kinds the provider cannot draw are
    /// skipped.
    pub fn draw_list<P: ResourceProvider>(
        &self,
        camera: &Camera,
        focus: LayerFocus,
        provider: &P,
    ) -> Vec<DrawCommand<P::Handle>> {
        match focus {
            LayerFocus::All => self
                .tiles
                .tiles_of_kinds(&TileKind::PAINT_ORDER)
                .filter_map(|tile| {
                    draw_command(tile, camera, focus.alpha_for(tile.kind().layer()), provider)
                })
                .collect(),
            LayerFocus::Only(_) => Layer::ALL
                .iter()
                .flat_map(move |&layer| {
                    let alpha = focus.alpha_for(layer);
                    self.tiles_in_layer(layer)
                        .filter_map(move |tile| draw_command(tile, camera, alpha, provider))
                })
                .collect(),
        }
    }
}

fn span(coordinate: i32) -> usize {
    usize::try_from(coordinate).map_or(0, |c| c + 1)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;

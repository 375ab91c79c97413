//! Render geometry derived on demand from tiles and camera state
//!
//! Nothing here draws. A renderer supplies a [`ResourceProvider`] that maps
//! tile kinds to its own texture handles, and receives [`DrawCommand`]s with
//! source and destination rectangles in pixels.

use crate::io::configuration::{
    ACTIVE_LAYER_ALPHA, INACTIVE_LAYER_ALPHA, MAX_CAMERA_X, MIN_CAMERA_X, TILE_SIZE,
};
use crate::model::kind::{Drawing, TileKind};
use crate::model::tile::{GridPos, Tile};
use crate::spatial::layers::Layer;

/// Resolves tile kinds to drawable resources
///
/// Passed explicitly wherever a drawable is needed, so the engine never
/// touches a global texture cache.
pub trait ResourceProvider {
    /// Renderer-side texture handle
    type Handle: Copy;

    /// Texture for a kind, or `None` if the kind has nothing to draw
    fn texture(&self, kind: TileKind) -> Option<Self::Handle>;

    /// Number of cells per row in the kind's tile sheet
    fn sheet_columns(&self, kind: TileKind) -> u32;

    /// Pixel size `(width, height)` of a static kind's image
    fn image_size(&self, kind: TileKind) -> (f32, f32);
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl ScreenRect {
    /// Create a rectangle
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Which image region a tile shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// Cell of a tile sheet
    Sheet {
        /// Sheet column
        column: u32,
        /// Sheet row
        row: u32,
    },
    /// The whole of a single image
    Static,
}

impl Sprite {
    /// Sprite for a tile given the sheet width of its kind
    pub fn for_tile(tile: &Tile, sheet_columns: u32) -> Self {
        match tile.kind().drawing() {
            Drawing::Sheet => {
                let columns = sheet_columns.max(1);
                Self::Sheet {
                    column: tile.variant() % columns,
                    row: tile.variant() / columns,
                }
            }
            Drawing::Static => Self::Static,
        }
    }

    /// Source rectangle within the sheet, `None` for static images
    pub fn source_rect(self) -> Option<ScreenRect> {
        match self {
            Self::Sheet { column, row } => Some(ScreenRect::new(
                column as f32 * TILE_SIZE,
                row as f32 * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE,
            )),
            Self::Static => None,
        }
    }
}

/// View position used to place grid cells on screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Horizontal scroll in pixels
    pub x: f32,
    /// Vertical offset that pins the map to the bottom of the window
    pub offset_y: f32,
}

impl Camera {
    /// Create a camera
    pub const fn new(x: f32, offset_y: f32) -> Self {
        Self { x, offset_y }
    }

    /// Camera for a window, bottom-aligning a map of `map_rows` rows
    ///
    /// Maps taller than the window are drawn from the top.
    pub fn for_window(x: f32, window_height: f32, map_rows: usize) -> Self {
        let map_height = map_rows as f32 * TILE_SIZE;
        Self::new(x, (window_height - map_height).max(0.0))
    }

    /// Camera moved horizontally by `dx`, clamped to the scroll range
    #[must_use]
    pub fn scrolled(self, dx: f32) -> Self {
        Self {
            x: (self.x + dx).clamp(MIN_CAMERA_X, MAX_CAMERA_X),
            ..self
        }
    }

    /// Screen rectangle covered by a grid cell
    pub fn cell_rect(&self, position: GridPos) -> ScreenRect {
        ScreenRect::new(
            (position.x as f32).mul_add(TILE_SIZE, -self.x),
            (position.y as f32).mul_add(TILE_SIZE, self.offset_y),
            TILE_SIZE,
            TILE_SIZE,
        )
    }

    /// Grid cell under a screen point
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> GridPos {
        GridPos::new(
            ((screen_x + self.x) / TILE_SIZE).floor() as i32,
            ((screen_y - self.offset_y) / TILE_SIZE).floor() as i32,
        )
    }
}

/// Which layer, if any, is highlighted while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerFocus {
    /// Every tile drawn opaque
    #[default]
    All,
    /// One layer opaque, the others faded
    Only(Layer),
}

impl LayerFocus {
    /// Alpha for tiles of `layer` under this focus
    pub fn alpha_for(self, layer: Layer) -> u8 {
        match self {
            Self::All => ACTIVE_LAYER_ALPHA,
            Self::Only(focused) if focused == layer => ACTIVE_LAYER_ALPHA,
            Self::Only(_) => INACTIVE_LAYER_ALPHA,
        }
    }
}

/// Everything a renderer needs to draw one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand<H> {
    /// Kind of the drawn tile
    pub kind: TileKind,
    /// Grid cell of the drawn tile
    pub position: GridPos,
    /// Texture to draw from
    pub handle: H,
    /// Region of the texture, `None` for the whole image
    pub source: Option<ScreenRect>,
    /// Destination on screen
    pub dest: ScreenRect,
    /// Opacity
    pub alpha: u8,
}

/// Build the draw command for one tile
///
/// Static images keep their own size and sit on the bottom-left corner of
/// their cell. Returns `None` when the provider has no texture for the kind.
pub fn draw_command<P: ResourceProvider>(
    tile: &Tile,
    camera: &Camera,
    alpha: u8,
    provider: &P,
) -> Option<DrawCommand<P::Handle>> {
    let handle = provider.texture(tile.kind())?;
    let cell = camera.cell_rect(tile.position());
    let sprite = Sprite::for_tile(tile, provider.sheet_columns(tile.kind()));

    let dest = match sprite {
        Sprite::Sheet { .. } => cell,
        Sprite::Static => {
            let (w, h) = provider.image_size(tile.kind());
            ScreenRect::new(cell.x, cell.y + cell.h - h, w, h)
        }
    };

    Some(DrawCommand {
        kind: tile.kind(),
        position: tile.position(),
        handle,
        source: sprite.source_rect(),
        dest,
        alpha,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/model/render.rs"]
mod tests;

//! Engine constants and runtime configuration defaults

/// Edge length of one grid cell in pixels
pub const TILE_SIZE: f32 = 64.0;

/// Layout cell value marking "no tile here"
pub const EMPTY_CELL: i32 = -1;

// The save canvas is fixed rather than derived from tile extents
/// Default width of a saved scene grid, in cells
pub const SAVE_WIDTH: usize = 60;
/// Default height of a saved scene grid, in cells
pub const SAVE_HEIGHT: usize = 11;

/// Directory (under the project root) holding authored levels
pub const LEVELS_DIR: &str = "levels";
/// Directory (under the project root) holding editor-saved scenes
pub const SCENES_DIR: &str = "scenes";
/// File extension of layout grids
pub const LAYOUT_EXTENSION: &str = "csv";

// Layer-focused rendering opacity
/// Alpha applied to tiles of the focused layer
pub const ACTIVE_LAYER_ALPHA: u8 = 255;
/// Alpha applied to tiles outside the focused layer
pub const INACTIVE_LAYER_ALPHA: u8 = 80;

// Horizontal scroll range of the editor camera, in pixels
/// Leftmost camera position
pub const MIN_CAMERA_X: f32 = -512.0;
/// Rightmost camera position
pub const MAX_CAMERA_X: f32 = 3072.0;

// Progress bar display settings
/// Minimum number of items before a batch progress bar is shown
pub const MIN_ITEMS_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Canvas dimensions used when a scene is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveBounds {
    /// Number of columns written per grid
    pub width: usize,
    /// Number of rows written per grid
    pub height: usize,
}

impl SaveBounds {
    /// Create bounds of the given size
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check whether a grid coordinate falls inside the canvas
    pub fn contains(&self, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.width)
            && usize::try_from(y).is_ok_and(|y| y < self.height)
    }
}

impl Default for SaveBounds {
    fn default() -> Self {
        Self::new(SAVE_WIDTH, SAVE_HEIGHT)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/configuration.rs"]
mod tests;

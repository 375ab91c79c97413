//! Per-kind layout grids and where they live on disk

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

use crate::io::codec::{Grid, load_grid, save_grid};
use crate::io::configuration::{EMPTY_CELL, LAYOUT_EXTENSION, LEVELS_DIR, SCENES_DIR};
use crate::io::error::Result;
use crate::model::kind::TileKind;

/// Where a layout's nine files are stored, relative to a project root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutLocation {
    /// Authored level: `levels/<n>/level_<n>_<suffix>.csv`
    Level(u32),
    /// Editor-saved scene: `scenes/<name>/<name>_<suffix>.csv`
    Scene(String),
}

impl LayoutLocation {
    /// Directory holding the layout files
    pub fn directory(&self, root: &Path) -> PathBuf {
        match self {
            Self::Level(level) => root.join(LEVELS_DIR).join(level.to_string()),
            Self::Scene(name) => root.join(SCENES_DIR).join(name),
        }
    }

    /// File holding the grid of one kind
    pub fn file_path(&self, root: &Path, kind: TileKind) -> PathBuf {
        let stem = match self {
            Self::Level(level) => format!("level_{level}_{}", kind.file_suffix()),
            Self::Scene(name) => format!("{name}_{}", kind.file_suffix()),
        };
        self.directory(root).join(format!("{stem}.{LAYOUT_EXTENSION}"))
    }
}

impl fmt::Display for LayoutLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "level {level}"),
            Self::Scene(name) => write!(f, "scene '{name}'"),
        }
    }
}

/// One integer grid per tile kind
///
/// A cell holds a variant index or [`EMPTY_CELL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    grids: [Grid; TileKind::COUNT],
}

impl Layout {
    /// Layout with every grid empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid of one kind
    pub fn grid(&self, kind: TileKind) -> &[Vec<i32>] {
        self.grids
            .get(kind.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replace the grid of one kind
    pub fn set_grid(&mut self, kind: TileKind, grid: Grid) {
        if let Some(slot) = self.grids.get_mut(kind.index()) {
            *slot = grid;
        }
    }

    /// Builder form of [`Layout::set_grid`]
    #[must_use]
    pub fn with_grid(mut self, kind: TileKind, grid: Grid) -> Self {
        self.set_grid(kind, grid);
        self
    }

    /// Value of one cell, `None` outside the grid's rows
    pub fn cell(&self, kind: TileKind, x: usize, y: usize) -> Option<i32> {
        self.grid(kind).get(y).and_then(|row| row.get(x)).copied()
    }

    /// Number of cells holding a tile in one kind's grid
    pub fn occupied(&self, kind: TileKind) -> usize {
        self.grid(kind)
            .iter()
            .flatten()
            .filter(|&&value| value != EMPTY_CELL)
            .count()
    }

    /// True when no grid has any row
    pub fn is_empty(&self) -> bool {
        self.grids.iter().all(Vec::is_empty)
    }

    /// Read all nine grids from `location`
    ///
    /// Missing files give empty grids (logged by the codec).
    ///
    /// # Errors
    ///
    /// Returns the codec's error when a present file has a malformed cell.
    pub fn load(root: &Path, location: &LayoutLocation) -> Result<Self> {
        let mut layout = Self::new();
        for kind in TileKind::ALL {
            layout.set_grid(kind, load_grid(&location.file_path(root, kind))?);
        }
        info!("Loaded layout of {location}");
        Ok(layout)
    }

    /// Write all nine grids to `location`, replacing existing files
    ///
    /// # Errors
    ///
    /// Returns [`crate::SceneError::FileSystem`] on the first failed write.
    pub fn save(&self, root: &Path, location: &LayoutLocation) -> Result<()> {
        info!("Saving {location} to '{}'", location.directory(root).display());
        for kind in TileKind::ALL {
            save_grid(&location.file_path(root, kind), self.grid(kind))?;
        }
        Ok(())
    }

    /// Write all nine grids as the scene `name` under `root`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SceneError::FileSystem`] on the first failed write.
    pub fn save_scene(&self, root: &Path, name: &str) -> Result<()> {
        self.save(root, &LayoutLocation::Scene(name.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/layout.rs"]
mod tests;

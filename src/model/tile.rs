//! Placed tile records and grid coordinates

use std::fmt;

use crate::model::kind::{Drawing, TileKind};
use crate::spatial::index::CellKey;

/// Integer grid coordinate of a cell
///
/// Columns grow to the right and rows grow downwards, matching layout files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPos {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl GridPos {
    /// Create a grid position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, or `None` past the edge of the `i32` plane
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Hash key of this cell
    pub const fn key(self) -> CellKey {
        CellKey::new(self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One placed tile
///
/// Holds only static data; screen geometry is derived on demand by
/// [`crate::model::render`] from a camera passed in by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    kind: TileKind,
    position: GridPos,
    variant: u32,
}

impl Tile {
    /// Tile factory: build a tile of `kind` at `position` showing `variant`
    pub const fn new(kind: TileKind, position: GridPos, variant: u32) -> Self {
        Self {
            kind,
            position,
            variant,
        }
    }

    /// Tile type
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Grid cell the tile occupies
    pub const fn position(&self) -> GridPos {
        self.position
    }

    /// Selected sub-image (only drawn for sheet kinds, always saved)
    pub const fn variant(&self) -> u32 {
        self.variant
    }

    /// True when the tile is drawn from a single fixed image
    pub const fn is_static(&self) -> bool {
        matches!(self.kind.drawing(), Drawing::Static)
    }

    pub(crate) const fn set_variant(&mut self, variant: u32) {
        self.variant = variant;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/tile.rs"]
mod tests;

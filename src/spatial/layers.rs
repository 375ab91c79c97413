//! Fixed partition of tile kinds into three visual layers

use std::fmt;

use crate::model::kind::TileKind;

const BACKGROUND_KINDS: [TileKind; 1] = [TileKind::BackgroundPalm];
const TERRAIN_KINDS: [TileKind; 4] = [
    TileKind::Terrain,
    TileKind::Crate,
    TileKind::Grass,
    TileKind::Enemy,
];
const FOREGROUND_KINDS: [TileKind; 4] = [
    TileKind::ForegroundPalm,
    TileKind::Coin,
    TileKind::PlayerSetup,
    TileKind::Constraint,
];

/// Visual layer used for isolated editing and faded rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Behind the terrain
    Background,
    /// Terrain and objects standing on it
    Terrain,
    /// In front of the terrain
    Foreground,
}

impl Layer {
    /// Number of layers
    pub const COUNT: usize = 3;

    /// All layers, back to front
    pub const ALL: [Self; Self::COUNT] = [Self::Background, Self::Terrain, Self::Foreground];

    /// Layer at a 0-based index, `None` outside `0..3`
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Background),
            1 => Some(Self::Terrain),
            2 => Some(Self::Foreground),
            _ => None,
        }
    }

    /// 0-based index, back to front
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kinds in this layer, in paint order
    pub const fn kinds(self) -> &'static [TileKind] {
        match self {
            Self::Background => &BACKGROUND_KINDS,
            Self::Terrain => &TERRAIN_KINDS,
            Self::Foreground => &FOREGROUND_KINDS,
        }
    }

    /// Layer a kind belongs to
    pub const fn of(kind: TileKind) -> Self {
        match kind {
            TileKind::BackgroundPalm => Self::Background,
            TileKind::Terrain | TileKind::Crate | TileKind::Grass | TileKind::Enemy => {
                Self::Terrain
            }
            TileKind::ForegroundPalm
            | TileKind::Coin
            | TileKind::PlayerSetup
            | TileKind::Constraint => Self::Foreground,
        }
    }

    /// Check whether a kind belongs to this layer
    pub fn contains(self, kind: TileKind) -> bool {
        Self::of(kind) == self
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Terrain => "Terrain",
            Self::Foreground => "Foreground",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/layers.rs"]
mod tests;

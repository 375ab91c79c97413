//! Closed set of tile types and their per-type properties

use std::fmt;

use crate::spatial::layers::Layer;

/// How tiles of a kind are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drawing {
    /// Cut from a tile sheet, selected by the variant index
    Sheet,
    /// One fixed image; the variant index does not affect drawing
    Static,
}

/// Logical tile type
///
/// The engine gives no gameplay meaning to these; they only decide grouping,
/// layer membership, file naming and draw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    /// Autotiled ground
    Terrain,
    /// Single-image crate
    Crate,
    /// Grass decoration
    Grass,
    /// Player spawn marker
    PlayerSetup,
    /// Enemy spawn marker
    Enemy,
    /// Collectible coin
    Coin,
    /// Palm drawn in front of terrain
    ForegroundPalm,
    /// Palm drawn behind terrain
    BackgroundPalm,
    /// Invisible movement constraint marker
    Constraint,
}

impl TileKind {
    /// Number of tile kinds
    pub const COUNT: usize = 9;

    /// All kinds in catalog order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Terrain,
        Self::Crate,
        Self::Grass,
        Self::PlayerSetup,
        Self::Enemy,
        Self::Coin,
        Self::ForegroundPalm,
        Self::BackgroundPalm,
        Self::Constraint,
    ];

    /// Order in which kinds are painted when no layer is focused
    pub const PAINT_ORDER: [Self; Self::COUNT] = [
        Self::BackgroundPalm,
        Self::Terrain,
        Self::Grass,
        Self::Crate,
        Self::Enemy,
        Self::ForegroundPalm,
        Self::Coin,
        Self::Constraint,
        Self::PlayerSetup,
    ];

    /// Position of this kind in [`TileKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Draw mode of this kind
    pub const fn drawing(self) -> Drawing {
        match self {
            Self::Crate | Self::ForegroundPalm | Self::BackgroundPalm => Drawing::Static,
            Self::Terrain
            | Self::Grass
            | Self::PlayerSetup
            | Self::Enemy
            | Self::Coin
            | Self::Constraint => Drawing::Sheet,
        }
    }

    /// True for kinds drawn from one fixed image
    pub const fn is_static(self) -> bool {
        matches!(self.drawing(), Drawing::Static)
    }

    /// Suffix used in layout file names (`level_1_<suffix>.csv`)
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Terrain => "terrain",
            Self::Crate => "crates",
            Self::Grass => "grass",
            Self::PlayerSetup => "player",
            Self::Enemy => "enemies",
            Self::Coin => "coins",
            Self::ForegroundPalm => "fg_palms",
            Self::BackgroundPalm => "bg_palms",
            Self::Constraint => "constraints",
        }
    }

    /// Look up a kind from its file suffix
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.file_suffix() == suffix)
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Terrain => "Terrain",
            Self::Crate => "Crate",
            Self::Grass => "Grass",
            Self::PlayerSetup => "PlayerSetup",
            Self::Enemy => "Enemy",
            Self::Coin => "Coin",
            Self::ForegroundPalm => "FG Palm",
            Self::BackgroundPalm => "BG Palm",
            Self::Constraint => "Constraint",
        }
    }

    /// Visual layer this kind belongs to
    pub const fn layer(self) -> Layer {
        Layer::of(self)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/kind.rs"]
mod tests;

//! Terrain variant table and the platform/column overrides
//!
//! The terrain sheet is a 4x4 grid of 64px cells. The table maps each of the
//! 16 neighbor masks to a sheet index using blob-style corner and edge rules.
//! Two overrides then handle one-tile-thick shapes, which the table alone
//! draws with the wrong caps.

use crate::autotile::mask::NeighborMask;

/// Top-left corner
pub const TOP_LEFT: u32 = 0;
/// Top edge
pub const TOP: u32 = 1;
/// Top-right corner
pub const TOP_RIGHT: u32 = 2;
/// Top cap of a one-wide column (also the table's right edge cell)
pub const COLUMN_TOP: u32 = 3;
/// Left edge
pub const LEFT: u32 = 4;
/// Surrounded on all sides
pub const CENTER: u32 = 5;
/// Right edge
pub const RIGHT: u32 = 6;
/// Middle of a one-wide column
pub const COLUMN_MID: u32 = 7;
/// Bottom-left corner
pub const BOTTOM_LEFT: u32 = 8;
/// Bottom edge
pub const BOTTOM: u32 = 9;
/// Bottom-right corner
pub const BOTTOM_RIGHT: u32 = 10;
/// Bottom cap of a one-wide column
pub const COLUMN_BOTTOM: u32 = 11;
/// Left cap of a one-high platform
pub const PLATFORM_LEFT: u32 = 12;
/// Middle of a one-high platform
pub const PLATFORM_MID: u32 = 13;
/// Right cap of a one-high platform
pub const PLATFORM_RIGHT: u32 = 14;
/// No terrain neighbors at all
pub const ISOLATED: u32 = 15;

/// Sheet index per neighbor mask (bit order N=1, E=2, S=4, W=8)
pub const TERRAIN_VARIANTS: [u32; 16] = [
    ISOLATED,     // ----
    BOTTOM,       // N---
    LEFT,         // -E--
    BOTTOM_LEFT,  // NE--
    TOP,          // --S-
    CENTER,       // N-S-
    TOP_LEFT,     // -ES-
    LEFT,         // NES-
    COLUMN_TOP,   // ---W
    BOTTOM_RIGHT, // N--W
    PLATFORM_MID, // -E-W
    BOTTOM,       // NE-W
    TOP_RIGHT,    // --SW
    RIGHT,        // N-SW
    TOP,          // -ESW
    CENTER,       // NESW
];

/// Variant straight from the table, without overrides
pub fn table_variant(mask: NeighborMask) -> u32 {
    TERRAIN_VARIANTS
        .get(mask.table_index())
        .copied()
        .unwrap_or(ISOLATED)
}

/// Final variant for a terrain tile with the given neighbors
///
/// The platform override applies when there is no terrain above or below,
/// then the column override when there is none left or right. Either one
/// replaces the table result; a tile with no neighbors ends up isolated.
pub fn resolve_variant(mask: NeighborMask) -> u32 {
    let mut variant = table_variant(mask);

    if mask.lacks_vertical() {
        let west = mask.contains(NeighborMask::WEST);
        let east = mask.contains(NeighborMask::EAST);
        variant = match (west, east) {
            (false, true) => PLATFORM_LEFT,
            (true, true) => PLATFORM_MID,
            (true, false) => PLATFORM_RIGHT,
            (false, false) => ISOLATED,
        };
    }

    if mask.lacks_horizontal() {
        let north = mask.contains(NeighborMask::NORTH);
        let south = mask.contains(NeighborMask::SOUTH);
        variant = match (north, south) {
            (false, true) => COLUMN_TOP,
            (true, false) => COLUMN_BOTTOM,
            (true, true) => COLUMN_MID,
            (false, false) => ISOLATED,
        };
    }

    variant
}

/// True when neither override touches a tile with this mask
pub const fn is_table_only(mask: NeighborMask) -> bool {
    !mask.lacks_vertical() && !mask.lacks_horizontal()
}

#[cfg(test)]
#[path = "../../tests/unit/autotile/rules.rs"]
mod tests;

//! Four-neighbor occupancy masks

use crate::model::tile::GridPos;

bitflags::bitflags! {
    /// Which 4-connected neighbors hold the same terrain
    ///
    /// Bit values match the layout of the variant table: N=1, E=2, S=4, W=8.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NeighborMask: u8 {
        /// Cell above (`y - 1`)
        const NORTH = 0b0001;
        /// Cell to the right (`x + 1`)
        const EAST  = 0b0010;
        /// Cell below (`y + 1`)
        const SOUTH = 0b0100;
        /// Cell to the left (`x - 1`)
        const WEST  = 0b1000;
    }
}

/// Neighbor directions with their grid offsets, in bit order
pub const NEIGHBOR_OFFSETS: [(NeighborMask, i32, i32); 4] = [
    (NeighborMask::NORTH, 0, -1),
    (NeighborMask::EAST, 1, 0),
    (NeighborMask::SOUTH, 0, 1),
    (NeighborMask::WEST, -1, 0),
];

impl NeighborMask {
    /// Build the mask of `position` by probing each neighbor with `is_same`
    ///
    /// Neighbors beyond the `i32` range are never probed and count as absent.
    pub fn probe<F>(position: GridPos, mut is_same: F) -> Self
    where
        F: FnMut(GridPos) -> bool,
    {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(_, dx, dy)| position.offset(dx, dy).is_some_and(&mut is_same))
            .fold(Self::empty(), |mask, &(flag, _, _)| mask | flag)
    }

    /// Table index of this mask (`0..16`)
    pub const fn table_index(self) -> usize {
        self.bits() as usize
    }

    /// True when neither the north nor the south neighbor is set
    pub const fn lacks_vertical(self) -> bool {
        !self.intersects(Self::NORTH.union(Self::SOUTH))
    }

    /// True when neither the east nor the west neighbor is set
    pub const fn lacks_horizontal(self) -> bool {
        !self.intersects(Self::EAST.union(Self::WEST))
    }

    /// Positions of the cell itself followed by its four neighbors
    pub fn neighborhood(position: GridPos) -> impl Iterator<Item = GridPos> {
        std::iter::once(position).chain(
            NEIGHBOR_OFFSETS
                .into_iter()
                .filter_map(move |(_, dx, dy)| position.offset(dx, dy)),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/autotile/mask.rs"]
mod tests;

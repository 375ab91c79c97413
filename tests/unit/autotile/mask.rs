//! Tests for neighbor mask construction

#[cfg(test)]
mod tests {
    use crate::autotile::mask::NeighborMask;
    use crate::model::tile::GridPos;
    use std::collections::HashSet;

    // Tests each direction sets its own bit
    // Verified by swapping the east and west offsets
    #[test]
    fn test_probe_sets_direction_bits() {
        let origin = GridPos::new(10, 10);
        let cases = [
            (GridPos::new(10, 9), NeighborMask::NORTH, 1),
            (GridPos::new(11, 10), NeighborMask::EAST, 2),
            (GridPos::new(10, 11), NeighborMask::SOUTH, 4),
            (GridPos::new(9, 10), NeighborMask::WEST, 8),
        ];
        for (neighbor, flag, bits) in cases {
            let mask = NeighborMask::probe(origin, |cell| cell == neighbor);
            assert_eq!(mask, flag);
            assert_eq!(mask.table_index(), bits);
        }
    }

    // Tests a fully surrounded cell gets every bit and an isolated cell none
    // Verified by starting the fold from NORTH
    #[test]
    fn test_probe_full_and_empty() {
        let origin = GridPos::new(0, 0);
        assert_eq!(NeighborMask::probe(origin, |_| true), NeighborMask::all());
        assert_eq!(NeighborMask::probe(origin, |_| false).table_index(), 0);
    }

    // Tests neighbors beyond the i32 plane are never probed
    // Verified by wrapping the offset at the plane edge
    #[test]
    fn test_probe_at_plane_corner() {
        let corner = GridPos::new(i32::MAX, i32::MIN);
        let mut probed = Vec::new();
        let mask = NeighborMask::probe(corner, |cell| {
            probed.push(cell);
            true
        });
        assert_eq!(mask, NeighborMask::SOUTH | NeighborMask::WEST);
        assert_eq!(probed.len(), 2);
    }

    // Tests vertical and horizontal gaps
    // Verified by checking only NORTH in lacks_vertical
    #[test]
    fn test_lacks_axes() {
        let row = NeighborMask::EAST | NeighborMask::WEST;
        assert!(row.lacks_vertical());
        assert!(!row.lacks_horizontal());

        let column = NeighborMask::NORTH | NeighborMask::SOUTH;
        assert!(column.lacks_horizontal());
        assert!(!column.lacks_vertical());

        assert!(!NeighborMask::SOUTH.lacks_vertical());
        assert!(NeighborMask::empty().lacks_vertical());
        assert!(NeighborMask::empty().lacks_horizontal());
    }

    // Tests the neighborhood is the cell plus four distinct neighbors
    // Verified by omitting the cell itself
    #[test]
    fn test_neighborhood() {
        let cells: Vec<_> = NeighborMask::neighborhood(GridPos::new(3, 3)).collect();
        assert_eq!(cells.first(), Some(&GridPos::new(3, 3)));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.iter().collect::<HashSet<_>>().len(), 5);

        let edge: Vec<_> = NeighborMask::neighborhood(GridPos::new(i32::MIN, 0)).collect();
        assert_eq!(edge.len(), 4);
    }
}

//! Tests for cell keys and the cell-to-tile index

#[cfg(test)]
mod tests {
    use crate::model::kind::TileKind;
    use crate::model::tile::{GridPos, Tile};
    use crate::spatial::arena::{TileArena, TileId};
    use crate::spatial::index::{CellKey, SpatialIndex};
    use std::collections::HashSet;

    fn ids<const N: usize>() -> [TileId; N] {
        let mut arena = TileArena::new();
        std::array::from_fn(|_| {
            arena.insert(Tile::new(TileKind::Terrain, GridPos::default(), 0))
        })
    }

    // Tests keys decode back to their coordinates at the extremes
    // Verified by sign-extending y into the high bits
    #[test]
    fn test_key_round_trip_extremes() {
        let values = [i32::MIN, -1, 0, 1, i32::MAX];
        for &x in &values {
            for &y in &values {
                let key = SpatialIndex::key(x, y);
                assert_eq!((key.x(), key.y()), (x, y));
            }
        }
    }

    // Tests keys of distinct coordinates never collide
    // Verified by packing with x * 1000 + y
    #[test]
    fn test_keys_collision_free() {
        let values = [i32::MIN, i32::MIN + 1, -65_536, -1, 0, 1, 65_536, i32::MAX];
        let mut seen = HashSet::new();
        for &x in &values {
            for &y in &values {
                assert!(seen.insert(CellKey::new(x, y).raw()));
            }
        }
        assert_eq!(seen.len(), values.len() * values.len());
        assert_ne!(CellKey::new(0, -1), CellKey::new(-1, 0));
    }

    // Tests insertion appends and lookup_any returns the oldest entry
    // Verified by inserting at the front of the bucket
    #[test]
    fn test_insert_appends() {
        let [a, b] = ids();
        let mut index = SpatialIndex::new();
        let cell = GridPos::new(4, 4);
        index.insert(cell, a, TileKind::BackgroundPalm);
        index.insert(cell, b, TileKind::Terrain);

        assert_eq!(index.at(cell).len(), 2);
        assert_eq!(index.lookup_any(cell), Some(a));
        assert_eq!(index.lookup_of_type(cell, TileKind::Terrain), Some(b));
        assert_eq!(index.lookup_of_type(cell, TileKind::Coin), None);
        assert_eq!(index.len(), 2);
        assert_eq!(index.cell_count(), 1);
    }

    // Tests predicate removal keeps non-matching entries
    // Verified by clearing the whole bucket in remove_where
    #[test]
    fn test_remove_where_filters() {
        let [a, b, c] = ids();
        let mut index = SpatialIndex::new();
        let cell = GridPos::new(0, 0);
        index.insert(cell, a, TileKind::BackgroundPalm);
        index.insert(cell, b, TileKind::Terrain);
        index.insert(cell, c, TileKind::Crate);

        let removed = index.remove_where(cell, |entry| entry.kind != TileKind::BackgroundPalm);
        let removed_ids: Vec<_> = removed.iter().map(|entry| entry.id).collect();

        assert_eq!(removed_ids, vec![b, c]);
        assert_eq!(index.lookup_any(cell), Some(a));
        assert_eq!(index.len(), 1);
    }

    // Tests emptied buckets are dropped from the map
    // Verified by leaving empty buckets in place
    #[test]
    fn test_empty_bucket_removed() {
        let [a] = ids();
        let mut index = SpatialIndex::new();
        let cell = GridPos::new(-3, 8);
        index.insert(cell, a, TileKind::Coin);
        index.remove_where(cell, |_| true);

        assert_eq!(index.cell_count(), 0);
        assert!(index.is_empty());
        assert_eq!(index.lookup_any(cell), None);
        assert!(index.remove_where(cell, |_| true).is_empty());
    }

    // Tests cells iteration reports every occupied position
    // Verified by decoding keys with x and y swapped
    #[test]
    fn test_cells_iteration() {
        let [a, b] = ids();
        let mut index = SpatialIndex::new();
        index.insert(GridPos::new(1, 2), a, TileKind::Grass);
        index.insert(GridPos::new(-5, 7), b, TileKind::Grass);

        let mut cells: Vec<_> = index.cells().map(|(position, _)| position).collect();
        cells.sort();
        assert_eq!(cells, vec![GridPos::new(-5, 7), GridPos::new(1, 2)]);

        index.clear();
        assert_eq!(index.len(), 0);
        assert_eq!(index.cells().count(), 0);
    }
}

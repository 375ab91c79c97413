//! Tests for the fixed layer partition

#[cfg(test)]
mod tests {
    use crate::model::kind::TileKind;
    use crate::spatial::layers::Layer;

    // Tests every kind belongs to exactly one layer
    // Verified by adding coins to the terrain layer kinds
    #[test]
    fn test_partition_covers_all_kinds_once() {
        for kind in TileKind::ALL {
            let holders: Vec<_> = Layer::ALL
                .into_iter()
                .filter(|layer| layer.kinds().contains(&kind))
                .collect();
            assert_eq!(holders, vec![Layer::of(kind)], "{kind}");
        }
        let total: usize = Layer::ALL.iter().map(|layer| layer.kinds().len()).sum();
        assert_eq!(total, TileKind::COUNT);
    }

    // Tests layer contents match the editor's three groups
    // Verified by moving grass into the foreground
    #[test]
    fn test_layer_kinds() {
        assert_eq!(Layer::Background.kinds(), &[TileKind::BackgroundPalm]);
        assert_eq!(
            Layer::Terrain.kinds(),
            &[
                TileKind::Terrain,
                TileKind::Crate,
                TileKind::Grass,
                TileKind::Enemy
            ]
        );
        assert_eq!(
            Layer::Foreground.kinds(),
            &[
                TileKind::ForegroundPalm,
                TileKind::Coin,
                TileKind::PlayerSetup,
                TileKind::Constraint
            ]
        );
    }

    // Tests only indices 0 to 2 name a layer
    // Verified by wrapping indices modulo three
    #[test]
    fn test_from_index_range() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_index(layer.index()), Some(layer));
        }
        assert_eq!(Layer::from_index(3), None);
        assert_eq!(Layer::from_index(usize::MAX), None);
    }

    // Tests contains agrees with layer membership
    // Verified by returning true for every kind
    #[test]
    fn test_contains() {
        assert!(Layer::Terrain.contains(TileKind::Crate));
        assert!(!Layer::Terrain.contains(TileKind::BackgroundPalm));
        assert!(Layer::Foreground.contains(TileKind::PlayerSetup));
        assert_eq!(Layer::Foreground.to_string(), "Foreground");
    }
}

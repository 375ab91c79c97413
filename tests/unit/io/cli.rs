//! Tests for argument parsing, scene naming and command processing

#[cfg(test)]
mod tests {
    use crate::SceneError;
    use crate::io::cli::{
        Cli, Command, SceneProcessor, converted_scene_name, format_summary, init_logging,
        validate_scene_name,
    };
    use crate::io::codec::{load_grid, save_grid};
    use crate::io::configuration::{SAVE_HEIGHT, SAVE_WIDTH};
    use crate::io::layout::{Layout, LayoutLocation};
    use crate::model::kind::TileKind;
    use crate::scene::store::SceneStore;
    use clap::Parser;
    use log::LevelFilter;
    use std::path::Path;

    fn cli(args: &[&str]) -> Option<Cli> {
        Cli::try_parse_from(std::iter::once("tilescene").chain(args.iter().copied())).ok()
    }

    // Tests defaults for root, canvas and verbosity
    // Verified by changing the default width
    #[test]
    fn test_parse_defaults() {
        let parsed = cli(&["summary", "beach"]);
        assert!(parsed.is_some_and(|cli| {
            cli.root == Path::new(".")
                && cli.width == SAVE_WIDTH
                && cli.height == SAVE_HEIGHT
                && cli.log_level() == LevelFilter::Info
                && cli.should_show_progress()
                && cli.command == Command::Summary { scene: "beach".to_string() }
        }));
    }

    // Tests convert accepts several levels and global flags after the subcommand
    // Verified by removing global from the quiet flag
    #[test]
    fn test_parse_convert() {
        let parsed = cli(&["convert", "1", "2", "3", "-q", "--root", "game"]);
        assert!(parsed.is_some_and(|cli| {
            cli.quiet
                && cli.log_level() == LevelFilter::Error
                && cli.root == Path::new("game")
                && cli.command
                    == Command::Convert {
                        levels: vec![1, 2, 3],
                        name: None,
                    }
        }));
        assert!(cli(&["convert"]).is_none());
        assert!(cli(&["convert", "one"]).is_none());
    }

    // Tests repeated -v raises the log level
    // Verified by treating -vv like -v
    #[test]
    fn test_verbosity() {
        assert!(cli(&["-v", "retile", "a"]).is_some_and(|c| c.log_level() == LevelFilter::Debug));
        assert!(cli(&["-vv", "retile", "a"]).is_some_and(|c| c.log_level() == LevelFilter::Trace));
    }

    // Tests logging can be initialised more than once
    // Verified by calling init instead of try_init
    #[test]
    fn test_init_logging_twice() {
        init_logging(LevelFilter::Warn);
        init_logging(LevelFilter::Trace);
    }

    // Tests zero canvas dimensions are rejected
    // Verified by accepting zero width
    #[test]
    fn test_bounds_validation() {
        let zero = cli(&["--width", "0", "summary", "a"]);
        assert!(zero.is_some_and(|cli| matches!(
            cli.bounds(),
            Err(SceneError::InvalidParameter { parameter: "width", .. })
        )));
        let custom = cli(&["-W", "8", "-H", "4", "summary", "a"]);
        assert!(custom.is_some_and(|cli| cli.bounds().is_ok_and(|b| (b.width, b.height) == (8, 4))));
    }

    // Tests scene names that would escape the scenes directory
    // Verified by only rejecting empty names
    #[test]
    fn test_scene_name_validation() {
        assert!(validate_scene_name("level_1").is_ok());
        assert!(validate_scene_name("").is_err());
        assert!(validate_scene_name("a/b").is_err());
        assert!(validate_scene_name("..").is_err());
        assert!(validate_scene_name("a\\b").is_err());
    }

    // Tests the default converted scene name
    // Verified by ignoring an explicit name
    #[test]
    fn test_converted_scene_name() {
        assert_eq!(converted_scene_name(4, None), "level_4");
        assert_eq!(converted_scene_name(4, Some("beach")), "beach");
    }

    // Tests the summary lists totals, layers and extent
    // Verified by counting only terrain in the total
    #[test]
    fn test_format_summary() {
        let mut store = SceneStore::new();
        store.load_from_layout(
            &Layout::new()
                .with_grid(TileKind::Terrain, vec![vec![0, 0], vec![0, -1]])
                .with_grid(TileKind::Coin, vec![vec![-1, -1, -1], vec![-1, -1, 0]]),
        );

        let report = format_summary("demo", &store);
        assert!(report.contains("Scene 'demo': 4 tile(s), extent 3x2"));
        assert!(report.contains("Terrain layer: 3"));
        assert!(report.contains("Foreground layer: 1"));
        assert!(report.contains("FG Palm"));
    }

    // Tests convert writes an autotiled scene for each level
    // Verified by saving the level layout without autotiling
    #[test]
    fn test_convert_levels() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().to_string_lossy().to_string();
        for level in [1, 2] {
            let path = LayoutLocation::Level(level).file_path(dir.path(), TileKind::Terrain);
            assert!(save_grid(&path, &[vec![0, 0, 0]]).is_ok());
        }

        let args = cli(&["-q", "--root", &root, "-W", "4", "-H", "2", "convert", "1", "2"])
            .expect("Failed to parse arguments");
        assert!(SceneProcessor::new(args).process().is_ok());

        for name in ["level_1", "level_2"] {
            let saved = LayoutLocation::Scene(name.to_string())
                .file_path(dir.path(), TileKind::Terrain);
            assert!(load_grid(&saved).is_ok_and(|grid| {
                grid == vec![vec![12, 13, 14, -1], vec![-1, -1, -1, -1]]
            }));
        }
    }

    // Tests a custom name is refused when converting several levels
    // Verified by saving every level under the same name
    #[test]
    fn test_convert_name_needs_single_level() {
        let args = cli(&["-q", "convert", "1", "2", "--name", "beach"])
            .expect("Failed to parse arguments");
        let result = SceneProcessor::new(args).process();
        assert!(matches!(
            result,
            Err(SceneError::InvalidParameter { parameter: "name", .. })
        ));
    }

    // Tests retile rewrites stale terrain variants in place
    // Verified by saving the loaded layout unchanged
    #[test]
    fn test_retile_scene() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().to_string_lossy().to_string();
        let stale = Layout::new().with_grid(TileKind::Terrain, vec![vec![5], vec![5]]);
        assert!(stale.save_scene(dir.path(), "cliff").is_ok());

        let args = cli(&["-q", "--root", &root, "-W", "1", "-H", "2", "retile", "cliff"])
            .expect("Failed to parse arguments");
        assert!(SceneProcessor::new(args).process().is_ok());

        let terrain = LayoutLocation::Scene("cliff".to_string())
            .file_path(dir.path(), TileKind::Terrain);
        assert!(load_grid(&terrain).is_ok_and(|grid| grid == vec![vec![3], vec![11]]));
    }

    // Tests a malformed scene file aborts the command
    // Verified by loading malformed files as empty
    #[test]
    fn test_malformed_scene_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().to_string_lossy().to_string();
        let terrain =
            LayoutLocation::Scene("bad".to_string()).file_path(dir.path(), TileKind::Terrain);
        assert!(std::fs::create_dir_all(dir.path().join("scenes").join("bad")).is_ok());
        assert!(std::fs::write(&terrain, "0,zero\n").is_ok());

        let args = cli(&["-q", "--root", &root, "summary", "bad"])
            .expect("Failed to parse arguments");
        let result = SceneProcessor::new(args).process();
        assert!(matches!(result, Err(SceneError::MalformedCell { .. })));
    }
}

//! Command-line interface for converting, retiling and inspecting scenes

use crate::io::configuration::{SAVE_HEIGHT, SAVE_WIDTH, SaveBounds};
use crate::io::error::{Result, invalid_parameter};
use crate::io::layout::{Layout, LayoutLocation};
use crate::io::progress::ProgressManager;
use crate::model::kind::TileKind;
use crate::scene::store::SceneStore;
use crate::spatial::layers::Layer;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "tilescene")]
#[command(
    author,
    version,
    about = "Convert, retile and inspect tile scene layouts"
)]
/// Command-line arguments for the scene tool
pub struct Cli {
    /// Project root holding the `levels` and `scenes` directories
    #[arg(short, long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Width of the saved scene canvas, in cells
    #[arg(short = 'W', long, default_value_t = SAVE_WIDTH, global = true)]
    pub width: usize,

    /// Height of the saved scene canvas, in cells
    #[arg(short = 'H', long, default_value_t = SAVE_HEIGHT, global = true)]
    pub height: usize,

    /// Only report errors and hide progress
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load authored levels, autotile them and save each as a scene
    Convert {
        /// Level numbers under `levels/`
        #[arg(required = true, value_name = "LEVEL")]
        levels: Vec<u32>,

        /// Scene name to save under (single level only, default `level_<n>`)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Recompute all terrain variants of a scene and save it in place
    Retile {
        /// Scene name under `scenes/`
        scene: String,
    },
    /// Print tile counts and extent of a scene
    Summary {
        /// Scene name under `scenes/`
        scene: String,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the quiet and verbose flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Save canvas from the width and height arguments
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn bounds(&self) -> Result<SaveBounds> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be positive"));
        }
        Ok(SaveBounds::new(self.width, self.height))
    }
}

/// Initialise stderr logging at the level chosen on the command line
///
/// `RUST_LOG` overrides the flags when set.
pub fn init_logging(level: LevelFilter) {
    // A logger installed earlier (e.g. by a test harness) is kept
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Check that a scene name is usable as a directory and file stem
///
/// # Errors
///
/// Returns an error for empty names and names containing path separators
/// or parent references
pub fn validate_scene_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_parameter("scene", &name, &"must not be empty"));
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(invalid_parameter(
            "scene",
            &name,
            &"must not contain path separators or '..'",
        ));
    }
    Ok(())
}

/// Scene name a converted level is saved under
pub fn converted_scene_name(level: u32, name: Option<&str>) -> String {
    name.map_or_else(|| format!("level_{level}"), ToString::to_string)
}

/// Human-readable report of a loaded scene
pub fn format_summary(name: &str, store: &SceneStore) -> String {
    let (columns, rows) = store.extent();
    let mut report = format!(
        "Scene '{name}': {} tile(s), extent {columns}x{rows}\n",
        store.total_tiles()
    );

    for layer in Layer::ALL {
        let _ = writeln!(report, "  {layer} layer: {}", store.tiles_in_layer(layer).count());
        for &kind in layer.kinds() {
            let _ = writeln!(report, "    {:<12} {}", kind.name(), store.tile_count(kind));
        }
    }
    report
}

/// Runs one command-line invocation
pub struct SceneProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SceneProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, a layout file is malformed
    /// or a scene cannot be written
    pub fn process(&mut self) -> Result<()> {
        let bounds = self.cli.bounds()?;

        match self.cli.command.clone() {
            Command::Convert { levels, name } => self.convert(&levels, name.as_deref(), bounds),
            Command::Retile { scene } => self.retile(&scene, bounds),
            Command::Summary { scene } => self.summary(&scene, bounds),
        }
    }

    fn convert(&mut self, levels: &[u32], name: Option<&str>, bounds: SaveBounds) -> Result<()> {
        if let Some(name) = name {
            if levels.len() != 1 {
                return Err(invalid_parameter(
                    "name",
                    &name,
                    &"only valid when converting a single level",
                ));
            }
            validate_scene_name(name)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(levels.len());
        }

        for &level in levels {
            if let Some(ref pm) = self.progress_manager {
                pm.start_item(&format!("level {level}"));
            }

            let scene_name = converted_scene_name(level, name);
            let store = self.load(&LayoutLocation::Level(level), bounds)?;
            store.serialize().save_scene(&self.cli.root, &scene_name)?;
            info!(
                "Converted level {level} into scene '{scene_name}' ({} tiles)",
                store.total_tiles()
            );

            if let Some(ref pm) = self.progress_manager {
                pm.complete_item();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn retile(&self, scene: &str, bounds: SaveBounds) -> Result<()> {
        validate_scene_name(scene)?;
        let location = LayoutLocation::Scene(scene.to_string());
        let store = self.load(&location, bounds)?;
        store.serialize().save(&self.cli.root, &location)?;
        info!(
            "Retiled scene '{scene}' ({} terrain tiles)",
            store.tile_count(TileKind::Terrain)
        );
        Ok(())
    }

    // Allow print for the report the user asked for
    #[allow(clippy::print_stdout)]
    fn summary(&self, scene: &str, bounds: SaveBounds) -> Result<()> {
        validate_scene_name(scene)?;
        let store = self.load(&LayoutLocation::Scene(scene.to_string()), bounds)?;
        print!("{}", format_summary(scene, &store));
        Ok(())
    }

    fn load(&self, location: &LayoutLocation, bounds: SaveBounds) -> Result<SceneStore> {
        let layout = Layout::load(&self.cli.root, location)?;
        let mut store = SceneStore::with_bounds(bounds);
        store.replace_scene(&layout);
        Ok(store)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/cli.rs"]
mod tests;

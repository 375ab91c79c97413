//! CLI entry point for converting and inspecting tile scenes

use clap::Parser;
use tilescene::io::cli::{Cli, SceneProcessor, init_logging};

fn main() -> tilescene::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let mut processor = SceneProcessor::new(cli);
    processor.process()
}

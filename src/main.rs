//! CLI entry point for cave level generation

use cavecrawl::io::cli::{Cli, LevelProcessor};
use clap::Parser;

fn main() -> cavecrawl::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = LevelProcessor::new(cli);
    processor.process()
}

//! Command-line interface for batch level generation and export

use crate::io::assets::TileCatalogue;
use crate::io::configuration::{
    DEFAULT_BORDER, DEFAULT_EXPORT_SCALE, DEFAULT_LEVEL_COUNT, DEFAULT_LEVEL_HEIGHT,
    DEFAULT_LEVEL_WIDTH, DEFAULT_SEED, DEFAULT_TILE_SIZE, MAX_EXPORT_SCALE, OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::export_level_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::write_level_text;
use crate::spatial::level::{LevelConfig, LevelGrid};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "cavecrawl")]
#[command(
    version,
    about = "Generate cave levels and export them as PNG minimaps"
)]
/// Command-line arguments for the level generator
pub struct Cli {
    /// Directory receiving the exported levels
    #[arg(value_name = "OUTPUT_DIR", default_value = "levels")]
    pub output_dir: PathBuf,

    /// Seed of the first level; later levels use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = DEFAULT_LEVEL_COUNT)]
    pub count: usize,

    /// Level width in tiles (even)
    #[arg(short = 'w', long, default_value_t = DEFAULT_LEVEL_WIDTH)]
    pub width: usize,

    /// Level height in tiles (even)
    #[arg(short = 'H', long, default_value_t = DEFAULT_LEVEL_HEIGHT)]
    pub height: usize,

    /// Outer wall thickness in tiles (even)
    #[arg(short, long, default_value_t = DEFAULT_BORDER)]
    pub border: usize,

    /// Minimap pixels per tile, between 1 and 64
    #[arg(
        long,
        default_value_t = DEFAULT_EXPORT_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_EXPORT_SCALE))
    )]
    pub scale: u32,

    /// Also write a plain-text dump next to each PNG
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate levels even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Level configuration described by the arguments
    pub const fn level_config(&self) -> LevelConfig {
        LevelConfig {
            width: self.width,
            height: self.height,
            border: self.border,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// Seeds of every level in the batch
    pub fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let first = self.seed;
        (0..self.count as u64).map(move |offset| first.wrapping_add(offset))
    }
}

/// Orchestrates batch generation with progress tracking
pub struct LevelProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LevelProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export every requested level
    ///
    /// # Errors
    ///
    /// Returns an error if the level configuration is invalid or an export fails
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.level_config();
        config.validate()?;

        let seeds: Vec<u64> = self
            .cli
            .seeds()
            .filter(|seed| self.should_generate(*seed))
            .collect();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for seed in seeds {
            self.process_level(config, seed)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Path of the PNG written for `seed`
    pub fn png_path(&self, seed: u64) -> PathBuf {
        Self::output_path(&self.cli.output_dir, seed, "png")
    }

    /// Path of the text dump written for `seed`
    pub fn text_path(&self, seed: u64) -> PathBuf {
        Self::output_path(&self.cli.output_dir, seed, "txt")
    }

    fn should_generate(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let png_path = self.png_path(seed);
        if png_path.exists() {
            info!("Skipping seed {seed}: {} exists", png_path.display());
            false
        } else {
            true
        }
    }

    fn process_level(&mut self, config: LevelConfig, seed: u64) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_level(seed);
        }

        let catalogue = TileCatalogue::standard(config.tile_size);
        let level = LevelGrid::generated(config, catalogue, seed)?;

        if let Some(ref pm) = self.progress_manager {
            pm.set_stage("exporting");
        }

        export_level_as_png(&level, self.cli.scale, &self.png_path(seed))?;
        if self.cli.text {
            write_level_text(&level, &self.text_path(seed))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_level(start_time.elapsed());
        }

        Ok(())
    }

    fn output_path(dir: &Path, seed: u64, extension: &str) -> PathBuf {
        dir.join(format!("{OUTPUT_PREFIX}{seed}.{extension}"))
    }
}

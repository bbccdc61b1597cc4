//! Level blueprint pipeline: carve, smooth both planes, classify

use crate::algorithm::classifier::{LevelBlueprint, classify};
use crate::algorithm::connectivity::{passable_count, reachable_count};
use crate::algorithm::maze::{MazeMatrix, backbone_start, carve_maze};
use crate::algorithm::smoothing::{SmoothingParams, smooth_maze};
use crate::io::configuration::{
    BACKGROUND_PASS, DEFAULT_BORDER, DEFAULT_LEVEL_HEIGHT, DEFAULT_LEVEL_WIDTH,
    FOREGROUND_FINE_PASS, FOREGROUND_ROUGH_PASS,
};
use crate::io::error::Result;
use log::debug;
use rand::Rng;

/// Size and smoothing schedule for one generated level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Level width in tiles (even)
    pub width: usize,
    /// Level height in tiles (even)
    pub height: usize,
    /// Outer wall thickness in tiles (even)
    pub border: usize,
    /// Passes applied in order to the foreground maze
    pub foreground_passes: Vec<SmoothingParams>,
    /// Pass applied to the copy used as the background maze
    pub background_pass: SmoothingParams,
}

impl GenerationConfig {
    /// Default smoothing schedule for a level of the given size
    pub fn with_size(width: usize, height: usize, border: usize) -> Self {
        Self {
            width,
            height,
            border,
            foreground_passes: vec![FOREGROUND_ROUGH_PASS, FOREGROUND_FINE_PASS],
            background_pass: BACKGROUND_PASS,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_LEVEL_WIDTH, DEFAULT_LEVEL_HEIGHT, DEFAULT_BORDER)
    }
}

/// Wall/open mazes for both planes before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazePair {
    /// Smoothed foreground maze
    pub foreground: MazeMatrix,
    /// Background maze derived from the foreground
    pub background: MazeMatrix,
}

/// Carve and smooth the foreground and background mazes
///
/// # Errors
///
/// Returns `InvalidConfiguration` for odd or zero sizes, an odd border, or a
/// smoothing pass with stop values above 10.
pub fn generate_mazes<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<MazePair> {
    let mut foreground = carve_maze(config.width, config.height, config.border, rng)?;

    let half_start = backbone_start(config.width / 2, config.height / 2);
    let start = [half_start[0] * 2, half_start[1] * 2];
    debug!(
        "carved {}x{} maze: {} open cells, {} reachable from start",
        config.width,
        config.height,
        passable_count(&foreground),
        reachable_count(&foreground, start)
    );

    for pass in &config.foreground_passes {
        foreground = smooth_maze(&foreground, config.border, pass, rng)?;
    }

    let background = smooth_maze(&foreground, config.border, &config.background_pass, rng)?;
    debug!(
        "smoothed mazes: foreground {} open, background {} open",
        passable_count(&foreground),
        passable_count(&background)
    );

    Ok(MazePair {
        foreground,
        background,
    })
}

/// Produce tile codes for both planes of a new level
///
/// # Errors
///
/// Propagates configuration errors from [`generate_mazes`].
pub fn generate_blueprint<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<LevelBlueprint> {
    let mazes = generate_mazes(config, rng)?;
    Ok(classify(
        &mazes.background,
        &mazes.foreground,
        config.border,
        rng,
    ))
}

//! Generation constants and runtime configuration defaults

use crate::algorithm::smoothing::SmoothingParams;

// Level dimensions are in tiles and must stay even for the carver's 2x2 expansion
/// Default level width in tiles
pub const DEFAULT_LEVEL_WIDTH: usize = 62;
/// Default level height in tiles
pub const DEFAULT_LEVEL_HEIGHT: usize = 62;
/// Thickness of the solid outer wall in tiles (must be even)
pub const DEFAULT_BORDER: usize = 2;
/// Edge length of a tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed level dimension
pub const MAX_LEVEL_DIMENSION: usize = 4096;

/// Pixels trimmed from every side of an actor's collider to form its hitbox
pub const HITBOX_MARGIN: i32 = 2;

/// First foreground pass: opens dead ends into rough caves
pub const FOREGROUND_ROUGH_PASS: SmoothingParams = SmoothingParams {
    iterations: 3,
    stop_air: 6,
    stop_wall: 10,
    air_neighbor_threshold: 4,
    wall_neighbor_threshold: 0,
};

/// Second foreground pass: softens the remaining corridor edges
pub const FOREGROUND_FINE_PASS: SmoothingParams = SmoothingParams {
    iterations: 5,
    stop_air: 7,
    stop_wall: 10,
    air_neighbor_threshold: 3,
    wall_neighbor_threshold: 0,
};

/// Background pass applied to a copy of the foreground maze
pub const BACKGROUND_PASS: SmoothingParams = SmoothingParams {
    iterations: 3,
    stop_air: 0,
    stop_wall: 4,
    air_neighbor_threshold: 6,
    wall_neighbor_threshold: 2,
};

/// Variant weights for `stone_floor` background tiles
pub const STONE_FLOOR_WEIGHTS: [f64; 4] = [0.45, 0.25, 0.15, 0.15];
/// Variant weights for `dirt_floor` background tiles
pub const DIRT_FLOOR_WEIGHTS: [f64; 6] = [0.35, 0.35, 0.05, 0.05, 0.10, 0.10];

/// Square radius (in tiles) around the player where enemies never spawn
pub const SPAWN_EXCLUSION_RADIUS: i32 = 10;

/// Spawn weights for hornet, beetle and spider, in that order
pub const ENEMY_SPAWN_WEIGHTS: [f64; 3] = [0.7, 0.05, 0.25];

/// Distance in pixels after which a projectile expires
pub const PROJECTILE_MAX_TRAVEL: f64 = 640.0;

// CLI defaults
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Number of levels generated per CLI run
pub const DEFAULT_LEVEL_COUNT: usize = 1;
/// Pixels per tile in exported minimaps
pub const DEFAULT_EXPORT_SCALE: u32 = 4;
/// Largest accepted minimap scale
pub const MAX_EXPORT_SCALE: u32 = 64;
/// Prefix of exported level files
pub const OUTPUT_PREFIX: &str = "level_";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

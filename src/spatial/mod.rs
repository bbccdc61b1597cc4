//! Spatial data structures for levels
//!
//! This module contains:
//! - Index arithmetic between pixel, tile and matrix coordinates
//! - Integer rectangles for bounds and colliders
//! - Tile codes and the two-plane level grid

/// Bounds checks and coordinate conversions
pub mod grid;
/// Two-plane level grid with tile placement and queries
pub mod level;
/// Axis-aligned pixel rectangles
pub mod rect;
/// Tile kinds, codes and placed tiles
pub mod tile;

pub use level::{LevelConfig, LevelGrid};
pub use rect::Rect;
pub use tile::{Plane, Tile, TileCode, TileKind};

//! Procedural cave levels and sub-stepped tile collision for top-down games
//!
//! Levels are carved as a maze, smoothed by a cellular automaton into caves
//! and classified into foreground wall tiles and background floor tiles.
//! Actors move through them with axis-separated, sub-stepped collision.

#![forbid(unsafe_code)]

/// Maze carving, smoothing, classification and connectivity
pub mod algorithm;
/// Errors, configuration, asset catalogue, CLI and export
pub mod io;
/// Random draws for generation and spawning
pub mod math;
/// Actors, movement and collision resolution
pub mod simulation;
/// Grid utilities, rectangles, tiles and the level grid
pub mod spatial;

pub use io::error::{GameError, Result};

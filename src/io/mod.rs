//! Input/output: errors, configuration, assets and level export

/// Tile sprite catalogue
pub mod assets;
/// Command-line interface and batch processing
pub mod cli;
/// Compile-time defaults and tuning tables
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// PNG minimap export
pub mod image;
/// Progress bars for batch generation
pub mod progress;
/// Plain-text level dumps
pub mod text;

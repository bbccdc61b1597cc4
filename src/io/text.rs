//! Plain-text level dumps, one character per tile

use crate::io::error::{GameError, Result};
use crate::spatial::level::LevelGrid;
use crate::spatial::tile::{Plane, TileKind};
use std::path::Path;

/// Character used for a tile kind
pub const fn kind_glyph(kind: TileKind) -> char {
    match kind {
        TileKind::None => ' ',
        TileKind::StoneFloor => ',',
        TileKind::DirtFloor => '.',
        TileKind::Wall => '=',
        TileKind::WallTop => '#',
        TileKind::Stone => 'o',
    }
}

/// Render the level as rows of glyphs, foreground over background
pub fn render_level_text(level: &LevelGrid) -> String {
    let mut text = String::with_capacity((level.width() + 1) * level.height());
    for y in 0..level.height() as i32 {
        for x in 0..level.width() as i32 {
            let kind = [Plane::Foreground, Plane::Background]
                .into_iter()
                .find_map(|plane| level.get_tile([x, y], plane).ok().flatten())
                .map_or(TileKind::None, |tile| tile.code.kind);
            text.push(kind_glyph(kind));
        }
        text.push('\n');
    }
    text
}

/// Write the text rendering to `output_path`
///
/// # Errors
///
/// Returns `FileSystem` if the directory or file cannot be written.
pub fn write_level_text(level: &LevelGrid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, render_level_text(level)).map_err(|e| GameError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write level text",
        source: e,
    })
}

//! PNG minimap export with one colored block per tile

use crate::io::configuration::MAX_EXPORT_SCALE;
use crate::io::error::{GameError, Result};
use crate::spatial::level::LevelGrid;
use crate::spatial::tile::{Plane, TileCode, TileKind};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const EMPTY: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Minimap color of a tile kind
pub const fn kind_color(kind: TileKind) -> [u8; 4] {
    match kind {
        TileKind::None => [0, 0, 0, 0],
        TileKind::StoneFloor => [92, 92, 104, 255],
        TileKind::DirtFloor => [138, 104, 72, 255],
        TileKind::Wall => [60, 52, 60, 255],
        TileKind::WallTop => [36, 30, 36, 255],
        TileKind::Stone => [150, 150, 160, 255],
    }
}

// Odd variants are drawn slightly darker so sprite variety shows up
fn tile_color(code: TileCode) -> Rgba<u8> {
    let [r, g, b, a] = kind_color(code.kind);
    let shade = |channel: u8| {
        if code.variant % 2 == 1 {
            channel.saturating_sub(12)
        } else {
            channel
        }
    };
    Rgba([shade(r), shade(g), shade(b), a])
}

/// Render the level with `scale` pixels per tile
///
/// The foreground tile wins where both planes are occupied; empty cells stay
/// transparent. `scale` is clamped to `1..=MAX_EXPORT_SCALE`.
pub fn render_level(level: &LevelGrid, scale: u32) -> RgbaImage {
    let scale = scale.clamp(1, MAX_EXPORT_SCALE);
    let mut img = ImageBuffer::from_pixel(
        (level.width() as u32).saturating_mul(scale),
        (level.height() as u32).saturating_mul(scale),
        EMPTY,
    );

    let planes = [Plane::Background, Plane::Foreground];
    for plane in planes {
        for tile in level.tiles(plane) {
            let [x, y] = tile.grid_position;
            let color = tile_color(tile.code);
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = (x as u32).saturating_mul(scale).saturating_add(dx);
                    let py = (y as u32).saturating_mul(scale).saturating_add(dy);
                    if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                        *pixel = color;
                    }
                }
            }
        }
    }

    img
}

/// Export the level as a PNG minimap
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_level_as_png(level: &LevelGrid, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_level(level, scale);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

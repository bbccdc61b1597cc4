//! Enemy spawn-site and variant selection

use crate::io::configuration::ENEMY_SPAWN_WEIGHTS;
use crate::io::error::{Result, WithContext, out_of_bounds};
use crate::math::probability::weighted_choice;
use crate::simulation::actor::EnemyKind;
use crate::spatial::grid::grid_index;
use crate::spatial::level::LevelGrid;
use crate::spatial::tile::Plane;
use glam::DVec2;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Enemy variants in the order of [`ENEMY_SPAWN_WEIGHTS`]
const SPAWN_ORDER: [EnemyKind; 3] = [EnemyKind::Hornet, EnemyKind::Beetle, EnemyKind::Spider];

/// Pick a free floor tile away from the player
///
/// Candidates are background tiles outside the square of `exclusion_radius`
/// tiles around `player_tile` whose foreground cell is empty. Returns the
/// chosen tile's pixel position, or `None` when no candidate exists. Games
/// normally pass [`crate::io::configuration::SPAWN_EXCLUSION_RADIUS`].
///
/// # Errors
///
/// Returns `OutOfBounds` if `player_tile` lies outside the level.
pub fn choose_spawn_site<R: Rng + ?Sized>(
    level: &LevelGrid,
    player_tile: [i32; 2],
    exclusion_radius: i32,
    rng: &mut R,
) -> Result<Option<DVec2>> {
    grid_index(player_tile, level.width(), level.height())
        .ok_or_else(|| out_of_bounds(player_tile, (level.width(), level.height())))
        .with_operation("choose_spawn_site")?;

    let mut candidates = Vec::new();
    for tile in level.tiles(Plane::Background) {
        let [x, y] = tile.grid_position;
        let excluded = (x - player_tile[0]).abs() <= exclusion_radius
            && (y - player_tile[1]).abs() <= exclusion_radius;
        if !excluded && level.get_tile(tile.grid_position, Plane::Foreground)?.is_none() {
            candidates.push(tile);
        }
    }

    debug!("{} spawn candidates outside radius {exclusion_radius}", candidates.len());

    Ok(candidates.choose(rng).map(|tile| {
        let [x, y] = tile.position();
        DVec2::new(f64::from(x), f64::from(y))
    }))
}

/// Draw an enemy variant from the spawn weights
pub fn choose_enemy_kind<R: Rng + ?Sized>(rng: &mut R) -> EnemyKind {
    SPAWN_ORDER
        .get(weighted_choice(rng, &ENEMY_SPAWN_WEIGHTS))
        .copied()
        .unwrap_or(EnemyKind::Hornet)
}

//! Sub-stepped, axis-separated movement with tile and target collision
//!
//! A call resolves one requested displacement. Each axis advances in steps no
//! longer than the hitbox along that axis, so a fast body can never tunnel
//! through a wall a tile thick. After every step the hitbox is tested against
//! nearby collidable tiles and then against a caller-supplied target set.

use crate::io::error::Result;
use crate::simulation::body::{Axis, Body};
use crate::spatial::level::{LevelGrid, SquareRadius};
use crate::spatial::rect::Rect;
use glam::DVec2;

/// Outcome of testing a hitbox against dynamic targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetHit {
    /// Nothing overlapped
    Miss,
    /// Overlap recorded as a collision; movement continues
    Touch,
    /// Overlap recorded as a collision; the axis stops where it is
    Block,
}

/// Dynamic-target hook consulted after each sub-step
pub trait HitTest {
    /// Test the mover's hitbox at its current sub-step position
    fn test_hit(&mut self, hitbox: &Rect) -> TargetHit;
}

/// Target set that never reports a hit
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTargets;

impl HitTest for NoTargets {
    fn test_hit(&mut self, _hitbox: &Rect) -> TargetHit {
        TargetHit::Miss
    }
}

/// Move `body` up to `distance` pixels along `direction`
///
/// `direction` is normalized internally. A zero or non-finite direction, or a
/// distance that is not strictly positive, leaves the body untouched. Blocking overlaps snap the
/// hitbox flush against the tile collider and end motion on that axis; the
/// other axis keeps going.
///
/// Returns whether any collision occurred.
///
/// # Errors
///
/// Returns `OutOfBounds` if the body's tile lies outside the level.
pub fn move_body<T: HitTest + ?Sized>(
    body: &mut Body,
    distance: f64,
    direction: DVec2,
    level: &LevelGrid,
    targets: &mut T,
) -> Result<bool> {
    let direction = direction.normalize_or_zero();
    if distance.is_nan() || distance <= 0.0 || direction == DVec2::ZERO {
        return Ok(false);
    }

    let mut remaining = Axis::BOTH.map(|axis| (axis.component(direction) * distance).abs());
    let mut collided = false;

    while remaining.iter().any(|left| *left > 0.0) {
        for (axis, left) in Axis::BOTH.into_iter().zip(remaining.iter_mut()) {
            if *left <= 0.0 {
                continue;
            }

            let component = axis.component(direction);
            let extent = f64::from(axis.extent(&body.hitbox()).max(1));
            let step = extent * component.abs();
            let delta = if *left - step < 0.0 || step <= 0.0 {
                let rest = *left;
                *left = 0.0;
                rest
            } else {
                *left -= step;
                step
            };
            body.advance(axis, delta.copysign(component));

            let blocked = resolve_tiles(body, axis, component > 0.0, level)?;
            let hit = if blocked {
                TargetHit::Block
            } else {
                targets.test_hit(&body.hitbox())
            };

            match hit {
                TargetHit::Miss => {}
                TargetHit::Touch => collided = true,
                TargetHit::Block => {
                    collided = true;
                    *left = 0.0;
                }
            }
        }
    }

    Ok(collided)
}

/// Snap the body out of any overlapped collidable tile on `axis`
fn resolve_tiles(body: &mut Body, axis: Axis, forward: bool, level: &LevelGrid) -> Result<bool> {
    let hitbox = body.hitbox();
    let tile_size = level.tile_size();
    // Tile colliders may be offset up to a tile away from their cell
    let span = |extent: i32| extent / tile_size.max(1) as i32 + 2;
    let radius = SquareRadius {
        x: span(hitbox.width),
        y: span(hitbox.height),
    };

    let overlapping = level
        .collidable_tiles_near(body.hitbox_tile(tile_size), radius)?
        .into_iter()
        .filter(|tile| hitbox.intersects(&tile.collider))
        .map(|tile| tile.collider);

    let edge = match (axis, forward) {
        (Axis::Horizontal, true) => overlapping.map(|collider| collider.left()).min(),
        (Axis::Horizontal, false) => overlapping.map(|collider| collider.right()).max(),
        (Axis::Vertical, true) => overlapping.map(|collider| collider.top()).min(),
        (Axis::Vertical, false) => overlapping.map(|collider| collider.bottom()).max(),
    };

    match edge {
        Some(edge) => {
            body.snap_hitbox(axis, edge, forward);
            Ok(true)
        }
        None => Ok(false),
    }
}

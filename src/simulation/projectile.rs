//! Straight-line projectiles that expire on impact or after a maximum range

use crate::io::configuration::PROJECTILE_MAX_TRAVEL;
use crate::io::error::Result;
use crate::simulation::actor::{Actor, ActorKind};
use crate::simulation::motion::move_body;
use crate::simulation::targets::StrikeTargets;
use crate::spatial::level::LevelGrid;
use glam::DVec2;
use log::trace;

/// Lifecycle state after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileState {
    /// Still travelling
    Flying,
    /// Hit something or ran out of range; should be removed
    Expired,
}

/// A shot travelling along a fixed direction
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    actor: Actor,
    direction: DVec2,
    speed: f64,
    damage: i32,
    travelled: f64,
    max_travel: f64,
}

impl Projectile {
    /// Create a projectile whose collider top-left is at `position`
    pub fn new(position: DVec2, size: [i32; 2], direction: DVec2, speed: f64, damage: i32) -> Self {
        Self {
            actor: Actor::spawn(ActorKind::Projectile, position, size),
            direction: direction.normalize_or_zero(),
            speed,
            damage,
            travelled: 0.0,
            max_travel: PROJECTILE_MAX_TRAVEL,
        }
    }

    /// Override the maximum travel distance
    #[must_use]
    pub const fn with_max_travel(mut self, max_travel: f64) -> Self {
        self.max_travel = max_travel;
        self
    }

    /// Fire from the center of `shooter` using its shot speed and damage
    pub fn fire_from(shooter: &Actor, direction: DVec2, size: [i32; 2]) -> Self {
        let half = DVec2::new(f64::from(size[0]) / 2.0, f64::from(size[1]) / 2.0);
        let profile = shooter.profile();
        Self::new(
            shooter.body().center() - half,
            size,
            direction,
            profile.shot_speed,
            profile.damage,
        )
    }

    /// Underlying actor record
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Unit travel direction
    pub const fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Distance covered so far
    pub const fn travelled(&self) -> f64 {
        self.travelled
    }

    /// Whether the projectile has finished its lifecycle
    pub const fn is_expired(&self) -> bool {
        self.actor.is_dead()
    }

    /// Advance by `speed * dt`, striking any overlapped target
    ///
    /// Travel is capped at the maximum range. Any tile or target collision
    /// expires the projectile, as does reaching the range limit.
    ///
    /// # Errors
    ///
    /// Propagates `OutOfBounds` from [`move_body`].
    pub fn update(
        &mut self,
        dt: f64,
        level: &LevelGrid,
        targets: &mut [Actor],
    ) -> Result<ProjectileState> {
        if self.is_expired() {
            return Ok(ProjectileState::Expired);
        }

        let distance = (self.speed * dt).min(self.max_travel - self.travelled);
        let mut strike = StrikeTargets::new(targets, self.damage, self.direction);
        let collided = move_body(
            self.actor.body_mut(),
            distance,
            self.direction,
            level,
            &mut strike,
        )?;
        self.travelled += distance.max(0.0);

        if collided || self.travelled >= self.max_travel {
            trace!(
                "projectile expired after {:.1}px, {} target(s) struck",
                self.travelled,
                strike.struck()
            );
            self.actor.kill();
            return Ok(ProjectileState::Expired);
        }

        Ok(ProjectileState::Flying)
    }
}

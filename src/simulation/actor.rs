//! Actor vitals, timers and knockback layered over a [`Body`]
//!
//! Every actor shares one record; behaviour differences live in the
//! per-variant [`ActorProfile`] table.

use crate::io::configuration::HITBOX_MARGIN;
use crate::io::error::Result;
use crate::simulation::body::Body;
use crate::simulation::motion::{HitTest, move_body};
use crate::spatial::level::LevelGrid;
use glam::DVec2;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Fast, fragile flyer
    Hornet,
    /// Mid-range skirmisher
    Spider,
    /// Slow, tough bruiser
    Beetle,
}

/// Variant tag of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// The controlled character
    Player,
    /// A hostile creature
    Enemy(EnemyKind),
    /// A travelling shot
    Projectile,
}

/// Per-variant tuning values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorProfile {
    /// Starting and maximum health
    pub max_health: i32,
    /// Seconds of invulnerability after taking damage
    pub grace_time: f64,
    /// Knockback decay per second
    pub knockback_resistance: f64,
    /// Walking speed in pixels per second
    pub speed: f64,
    /// Seconds between attacks
    pub attack_cooldown: f64,
    /// Speed of fired projectiles in pixels per second
    pub shot_speed: f64,
    /// Damage dealt per hit
    pub damage: i32,
    /// Score awarded for defeating the actor
    pub score_value: u32,
}

impl ActorProfile {
    const BASE: Self = Self {
        max_health: 6,
        grace_time: 0.25,
        knockback_resistance: 40.0,
        speed: 0.0,
        attack_cooldown: 0.5,
        shot_speed: 1.0,
        damage: 1,
        score_value: 0,
    };

    /// Tuning table entry for a variant
    pub const fn for_kind(kind: ActorKind) -> Self {
        match kind {
            ActorKind::Player => Self {
                grace_time: 1.0,
                knockback_resistance: 70.0,
                speed: 100.0,
                attack_cooldown: 0.25,
                shot_speed: 500.0,
                ..Self::BASE
            },
            ActorKind::Enemy(EnemyKind::Hornet) => Self {
                max_health: 1,
                grace_time: 0.8,
                knockback_resistance: 200.0,
                speed: 80.0,
                attack_cooldown: 0.75,
                shot_speed: 100.0,
                score_value: 10,
                ..Self::BASE
            },
            ActorKind::Enemy(EnemyKind::Spider) => Self {
                max_health: 2,
                grace_time: 0.8,
                knockback_resistance: 200.0,
                speed: 150.0,
                attack_cooldown: 1.0,
                shot_speed: 100.0,
                score_value: 20,
                ..Self::BASE
            },
            ActorKind::Enemy(EnemyKind::Beetle) => Self {
                max_health: 3,
                grace_time: 0.8,
                knockback_resistance: 100.0,
                speed: 40.0,
                attack_cooldown: 3.0,
                shot_speed: 100.0,
                score_value: 40,
                ..Self::BASE
            },
            ActorKind::Projectile => Self::BASE,
        }
    }
}

/// A player, enemy or projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    kind: ActorKind,
    profile: ActorProfile,
    body: Body,
    health: i32,
    vulnerable: bool,
    invulnerable_time: f64,
    knockback: f64,
    knockback_direction: DVec2,
    can_attack: bool,
    attacking: bool,
    attack_time: f64,
    visible: bool,
}

impl Actor {
    /// Create an actor with the default profile for its kind
    pub const fn new(kind: ActorKind, body: Body) -> Self {
        Self::with_profile(kind, ActorProfile::for_kind(kind), body)
    }

    /// Create an actor with a custom profile
    pub const fn with_profile(kind: ActorKind, profile: ActorProfile, body: Body) -> Self {
        Self {
            kind,
            profile,
            body,
            health: profile.max_health,
            vulnerable: true,
            invulnerable_time: 0.0,
            knockback: 0.0,
            knockback_direction: DVec2::ZERO,
            can_attack: false,
            attacking: false,
            attack_time: 0.0,
            visible: true,
        }
    }

    /// Create an actor at `position` with a collider of `size` pixels
    pub fn spawn(kind: ActorKind, position: DVec2, size: [i32; 2]) -> Self {
        Self::new(kind, Body::new(position, size, HITBOX_MARGIN))
    }

    /// Variant tag
    pub const fn kind(&self) -> ActorKind {
        self.kind
    }

    /// Tuning values
    pub const fn profile(&self) -> &ActorProfile {
        &self.profile
    }

    /// Spatial state
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable spatial state
    pub const fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Current health
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Whether damage is currently accepted
    pub const fn is_vulnerable(&self) -> bool {
        self.vulnerable
    }

    /// Remaining knockback strength
    pub const fn knockback(&self) -> f64 {
        self.knockback
    }

    /// Whether the renderer should draw the actor this frame
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an attack may start
    pub const fn can_attack(&self) -> bool {
        self.can_attack
    }

    /// Whether an attack is in progress
    pub const fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Whether health has run out
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Set health, capped at the profile maximum
    pub fn set_health(&mut self, health: i32) {
        self.health = health.min(self.profile.max_health);
    }

    /// Drop health to zero
    pub const fn kill(&mut self) {
        self.health = 0;
    }

    /// Apply damage and knockback unless inside a grace period
    pub fn take_damage(&mut self, amount: i32, direction: DVec2) {
        if !self.vulnerable {
            return;
        }

        self.health -= amount;
        self.knockback =
            f64::from(amount) * 100.0 / f64::from(self.profile.max_health.max(1));
        self.knockback_direction = direction;
        self.vulnerable = false;
        self.invulnerable_time = self.profile.grace_time;
    }

    /// Advance the invulnerability, attack and knockback timers by `dt` seconds
    pub fn tick_cooldowns(&mut self, dt: f64) {
        if !self.vulnerable {
            self.invulnerable_time -= dt;
            if self.invulnerable_time <= 0.0 {
                self.vulnerable = true;
                self.invulnerable_time = 0.0;
            }
        }

        if !self.can_attack || self.attacking {
            self.attack_time -= dt;
            if self.attack_time <= 0.0 {
                self.can_attack = true;
                self.attacking = false;
            }
        }

        if self.knockback > 0.0 {
            self.knockback -= self.profile.knockback_resistance * dt;
        } else {
            self.knockback = 0.0;
        }
    }

    /// Start an attack if the cooldown allows, returning whether it started
    pub const fn try_begin_attack(&mut self) -> bool {
        if !self.can_attack || self.attacking {
            return false;
        }
        self.can_attack = false;
        self.attacking = true;
        self.attack_time = self.profile.attack_cooldown;
        true
    }

    /// Flicker visibility while invulnerable
    pub fn blink(&mut self) {
        self.visible = self.vulnerable || (self.invulnerable_time * 50.0).sin() >= 0.0;
    }

    /// Walk at profile speed for `dt` seconds
    ///
    /// # Errors
    ///
    /// Propagates `OutOfBounds` from [`move_body`].
    pub fn walk<T: HitTest + ?Sized>(
        &mut self,
        direction: DVec2,
        dt: f64,
        level: &LevelGrid,
        targets: &mut T,
    ) -> Result<bool> {
        move_body(&mut self.body, self.profile.speed * dt, direction, level, targets)
    }

    /// Slide along the last knockback direction for `dt` seconds
    ///
    /// # Errors
    ///
    /// Propagates `OutOfBounds` from [`move_body`].
    pub fn apply_knockback<T: HitTest + ?Sized>(
        &mut self,
        dt: f64,
        level: &LevelGrid,
        targets: &mut T,
    ) -> Result<bool> {
        move_body(
            &mut self.body,
            self.knockback * 10.0 * dt,
            self.knockback_direction,
            level,
            targets,
        )
    }
}

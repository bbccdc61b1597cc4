//! Frame-stepped actor simulation over a level grid
//!
//! Movement never reaches into global state: every call takes the level and
//! the dynamic-target set explicitly.

/// Actor vitals, cooldowns and variant profiles
pub mod actor;
/// Position, collider and hitbox of a moving actor
pub mod body;
/// Sub-stepped movement and collision resolution
pub mod motion;
/// Straight-line projectiles
pub mod projectile;
/// Enemy spawn selection
pub mod spawning;
/// Target sets for the movement hit test
pub mod targets;

pub use actor::{Actor, ActorKind, EnemyKind};
pub use body::Body;
pub use motion::{HitTest, NoTargets, TargetHit, move_body};

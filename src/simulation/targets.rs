//! Dynamic-target sets built from actors

use crate::simulation::actor::Actor;
use crate::simulation::motion::{HitTest, TargetHit};
use crate::spatial::rect::Rect;
use glam::DVec2;

/// Reports touching any vulnerable actor without stopping the mover
#[derive(Debug, Clone, Copy)]
pub struct VulnerableTargets<'a> {
    actors: &'a [Actor],
}

impl<'a> VulnerableTargets<'a> {
    /// Watch the given actors
    pub const fn new(actors: &'a [Actor]) -> Self {
        Self { actors }
    }
}

impl HitTest for VulnerableTargets<'_> {
    fn test_hit(&mut self, hitbox: &Rect) -> TargetHit {
        let touched = self
            .actors
            .iter()
            .any(|actor| actor.is_vulnerable() && hitbox.intersects(&actor.body().hitbox()));
        if touched {
            TargetHit::Touch
        } else {
            TargetHit::Miss
        }
    }
}

/// Damages every overlapped actor and blocks the mover
///
/// Used by projectiles: each overlap calls [`Actor::take_damage`], which
/// itself ignores actors inside their grace period.
#[derive(Debug)]
pub struct StrikeTargets<'a> {
    targets: &'a mut [Actor],
    damage: i32,
    direction: DVec2,
    struck: usize,
}

impl<'a> StrikeTargets<'a> {
    /// Strike `targets` for `damage`, knocking them along `direction`
    pub const fn new(targets: &'a mut [Actor], damage: i32, direction: DVec2) -> Self {
        Self {
            targets,
            damage,
            direction,
            struck: 0,
        }
    }

    /// Number of overlaps seen so far
    pub const fn struck(&self) -> usize {
        self.struck
    }
}

impl HitTest for StrikeTargets<'_> {
    fn test_hit(&mut self, hitbox: &Rect) -> TargetHit {
        let mut hit = TargetHit::Miss;
        for target in self.targets.iter_mut() {
            if hitbox.intersects(&target.body().hitbox()) {
                target.take_damage(self.damage, self.direction);
                self.struck += 1;
                hit = TargetHit::Block;
            }
        }
        hit
    }
}

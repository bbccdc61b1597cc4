//! Tests for projectile flight and expiry

#[cfg(test)]
mod tests {
    use crate::walled_room;
    use cavecrawl::simulation::actor::{Actor, ActorKind, EnemyKind};
    use cavecrawl::simulation::projectile::{Projectile, ProjectileState};
    use glam::DVec2;

    fn shot_right(speed: f64) -> Projectile {
        Projectile::new(DVec2::new(40.0, 40.0), [8, 8], DVec2::new(1.0, 0.0), speed, 1)
    }

    #[test]
    fn test_flies_through_open_space() {
        let level = walled_room(10, 10);
        let mut shot = shot_right(100.0);

        let state = shot.update(0.1, &level, &mut []).expect("in bounds");
        assert_eq!(state, ProjectileState::Flying);
        assert!((shot.travelled() - 10.0).abs() < 1e-9);
        assert!((shot.actor().body().position().x - 50.0).abs() < 1e-9);
        assert!(!shot.is_expired());
    }

    // Tests a wall hit expires the shot flush with the wall
    #[test]
    fn test_expires_on_wall() {
        let level = walled_room(10, 10);
        let mut shot = shot_right(400.0);

        let state = shot.update(1.0, &level, &mut []).expect("in bounds");
        assert_eq!(state, ProjectileState::Expired);
        assert!(shot.is_expired());
        assert_eq!(shot.actor().body().hitbox().right(), 146);

        let again = shot.update(1.0, &level, &mut []).expect("in bounds");
        assert_eq!(again, ProjectileState::Expired);
    }

    // Tests a struck target takes damage and the shot expires
    #[test]
    fn test_strikes_target() {
        let level = walled_room(10, 10);
        let mut targets = vec![Actor::spawn(
            ActorKind::Enemy(EnemyKind::Spider),
            DVec2::new(80.0, 36.0),
            [16, 16],
        )];
        let mut shot = shot_right(200.0);

        let state = shot.update(1.0, &level, &mut targets).expect("in bounds");
        assert_eq!(state, ProjectileState::Expired);
        let target = targets.first().expect("target kept");
        assert_eq!(target.health(), 1);
        assert!(!target.is_vulnerable());
        assert!(shot.actor().body().hitbox().right() < 146);
    }

    #[test]
    fn test_expires_at_max_travel() {
        let level = walled_room(10, 10);
        let mut shot = shot_right(100.0).with_max_travel(15.0);

        let first = shot.update(0.1, &level, &mut []).expect("in bounds");
        assert_eq!(first, ProjectileState::Flying);

        let second = shot.update(0.1, &level, &mut []).expect("in bounds");
        assert_eq!(second, ProjectileState::Expired);
        assert!((shot.travelled() - 15.0).abs() < 1e-9);
        assert!((shot.actor().body().position().x - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_fire_from_shooter_center() {
        let player = Actor::spawn(ActorKind::Player, DVec2::new(40.0, 40.0), [16, 16]);
        let shot = Projectile::fire_from(&player, DVec2::new(0.0, -3.0), [4, 4]);

        assert_eq!(shot.actor().body().position(), DVec2::new(46.0, 46.0));
        assert_eq!(shot.actor().kind(), ActorKind::Projectile);
        assert!(shot.direction().abs_diff_eq(DVec2::new(0.0, -1.0), 1e-12));
        assert!(shot.travelled().abs() < f64::EPSILON);
    }
}

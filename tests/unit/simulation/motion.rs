//! Tests for sub-stepped movement and collision resolution

#[cfg(test)]
mod tests {
    use crate::{empty_level, walled_room};
    use cavecrawl::GameError;
    use cavecrawl::simulation::body::Body;
    use cavecrawl::simulation::motion::{HitTest, NoTargets, TargetHit, move_body};
    use cavecrawl::spatial::rect::Rect;
    use cavecrawl::spatial::tile::{Plane, TileCode, TileFlags, TileKind};
    use glam::DVec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Records every hitbox it is asked about and answers with a fixed hit
    struct Recorder {
        answer: TargetHit,
        seen: Vec<Rect>,
    }

    impl HitTest for Recorder {
        fn test_hit(&mut self, hitbox: &Rect) -> TargetHit {
            self.seen.push(*hitbox);
            self.answer
        }
    }

    fn room_body() -> Body {
        Body::new(DVec2::new(40.0, 40.0), [16, 16], 2)
    }

    #[test]
    fn test_zero_distance_or_direction_is_noop() {
        let level = walled_room(6, 6);
        let mut body = room_body();

        for (distance, direction) in [
            (0.0, DVec2::new(1.0, 0.0)),
            (-5.0, DVec2::new(1.0, 0.0)),
            (f64::NAN, DVec2::new(1.0, 0.0)),
            (50.0, DVec2::ZERO),
            (50.0, DVec2::new(f64::NAN, 1.0)),
            (50.0, DVec2::new(f64::INFINITY, 0.0)),
        ] {
            let collided = move_body(&mut body, distance, direction, &level, &mut NoTargets)
                .expect("in bounds");
            assert!(!collided);
            assert_eq!(body, room_body());
        }
    }

    // Tests free movement covers exactly the requested distance
    #[test]
    fn test_open_space_moves_full_distance() {
        let level = walled_room(6, 6);
        let mut body = room_body();

        let collided = move_body(&mut body, 20.0, DVec2::new(1.0, 0.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!(!collided);
        assert!((body.position().x - 60.0).abs() < 1e-9);
        assert!((body.position().y - 40.0).abs() < 1e-9);

        let mut diagonal = room_body();
        move_body(&mut diagonal, 10.0, DVec2::new(-3.0, 4.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!((diagonal.position().x - 34.0).abs() < 1e-9);
        assert!((diagonal.position().y - 48.0).abs() < 1e-9);
    }

    // Tests each direction stops flush against the room's walls
    #[test]
    fn test_stops_flush_against_each_wall() {
        let level = walled_room(6, 6);
        // Stone colliders are inset by 2px: inner faces at 14 and 82
        let cases = [
            (DVec2::new(1.0, 0.0), 82),
            (DVec2::new(-1.0, 0.0), 14),
            (DVec2::new(0.0, 1.0), 82),
            (DVec2::new(0.0, -1.0), 14),
        ];

        for (direction, edge) in cases {
            let mut body = room_body();
            let collided = move_body(&mut body, 1000.0, direction, &level, &mut NoTargets)
                .expect("in bounds");
            assert!(collided, "{direction:?}");

            let hitbox = body.hitbox();
            let leading = match (direction.x > 0.0, direction.x < 0.0, direction.y > 0.0) {
                (true, _, _) => hitbox.right(),
                (_, true, _) => hitbox.left(),
                (_, _, true) => hitbox.bottom(),
                _ => hitbox.top(),
            };
            assert_eq!(leading, edge, "{direction:?}");
        }
    }

    // Tests a blocked axis stops while the other keeps moving
    #[test]
    fn test_axes_resolve_independently() {
        let level = walled_room(6, 6);
        let mut body = room_body();

        let collided = move_body(&mut body, 1000.0, DVec2::new(1.0, 1.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!(collided);
        assert_eq!(body.hitbox().right(), 82);
        assert_eq!(body.hitbox().bottom(), 82);

        let mut slide = room_body();
        move_body(&mut slide, 40.0, DVec2::new(0.0, -1.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert_eq!(slide.hitbox().top(), 14);
        assert!((slide.position().x - 40.0).abs() < 1e-9);
    }

    // Tests a fast mover cannot tunnel through a single pillar
    // Verified by moving each axis in a single step
    #[test]
    fn test_no_tunnelling_through_pillar() {
        let mut level = empty_level(12, 4);
        level
            .place_tile(
                [8, 1],
                TileCode::new(TileKind::Stone, 0),
                Plane::Foreground,
                TileFlags::SOLID,
                &mut StdRng::seed_from_u64(0),
            )
            .expect("in bounds");
        let mut body = Body::new(DVec2::new(16.0, 16.0), [16, 16], 2);

        let collided = move_body(&mut body, 150.0, DVec2::new(1.0, 0.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!(collided);
        assert_eq!(body.hitbox().right(), 130);
        assert!((body.position().x - 116.0).abs() < 1e-9);
    }

    // Tests offset wall colliders stop a body on their shifted faces
    #[test]
    fn test_stops_on_offset_wall_colliders() {
        let mut level = empty_level(6, 10);
        let mut rng = StdRng::seed_from_u64(0);
        for (position, kind) in [([2, 1], TileKind::Wall), ([2, 8], TileKind::WallTop)] {
            let code = TileCode::new(kind, 0);
            level
                .place_tile(position, code, Plane::Foreground, TileFlags::SOLID, &mut rng)
                .expect("in bounds");
        }
        let collider = |position| {
            level
                .get_tile(position, Plane::Foreground)
                .expect("in bounds")
                .map(|tile| tile.collider)
                .expect("placed tile")
        };
        let wall = collider([2, 1]);
        let wall_top = collider([2, 8]);
        // Wall sits 10px above its cell, wall top 4px below its cell
        assert_eq!((wall.top(), wall.bottom()), (10, 18));
        assert_eq!((wall_top.top(), wall_top.bottom()), (136, 144));

        let mut up = Body::new(DVec2::new(32.0, 60.0), [16, 16], 2);
        let collided = move_body(&mut up, 1000.0, DVec2::new(0.0, -1.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!(collided);
        assert_eq!(up.hitbox().top(), wall.bottom());

        let mut down = Body::new(DVec2::new(32.0, 60.0), [16, 16], 2);
        let collided = move_body(&mut down, 1000.0, DVec2::new(0.0, 1.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!(collided);
        assert_eq!(down.hitbox().bottom(), wall_top.top());
    }

    #[test]
    fn test_decor_tiles_do_not_block() {
        let mut level = empty_level(12, 4);
        level
            .place_tile(
                [3, 1],
                TileCode::new(TileKind::Stone, 0),
                Plane::Foreground,
                TileFlags::DECOR,
                &mut StdRng::seed_from_u64(0),
            )
            .expect("in bounds");
        let mut body = Body::new(DVec2::new(16.0, 16.0), [16, 16], 2);

        let collided = move_body(&mut body, 48.0, DVec2::new(1.0, 0.0), &level, &mut NoTargets)
            .expect("in bounds");
        assert!(!collided);
        assert!((body.position().x - 64.0).abs() < 1e-9);
    }

    // Tests leaving the grid surfaces an out-of-bounds error
    #[test]
    fn test_leaving_grid_is_an_error() {
        let level = empty_level(4, 4);
        let mut body = Body::new(DVec2::new(16.0, 16.0), [16, 16], 2);

        let result = move_body(&mut body, 200.0, DVec2::new(1.0, 0.0), &level, &mut NoTargets);
        assert!(matches!(result, Err(GameError::OutOfBounds { .. })));
    }

    // Tests touches are reported without stopping, blocks stop the axis
    #[test]
    fn test_target_hooks() {
        let level = walled_room(6, 6);

        let mut touch = Recorder {
            answer: TargetHit::Touch,
            seen: Vec::new(),
        };
        let mut toucher = room_body();
        let touched = move_body(&mut toucher, 20.0, DVec2::new(1.0, 0.0), &level, &mut touch)
            .expect("in bounds");
        assert!(touched);
        assert!((toucher.position().x - 60.0).abs() < 1e-9);
        assert_eq!(touch.seen.len(), 2);

        let mut block = Recorder {
            answer: TargetHit::Block,
            seen: Vec::new(),
        };
        let mut blocked = room_body();
        let stopped = move_body(&mut blocked, 20.0, DVec2::new(1.0, 0.0), &level, &mut block)
            .expect("in bounds");
        assert!(stopped);
        assert_eq!(block.seen.len(), 1);
        assert!((blocked.position().x - 52.0).abs() < 1e-9);
    }
}

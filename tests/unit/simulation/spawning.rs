//! Tests for spawn-site and enemy selection

#[cfg(test)]
mod tests {
    use crate::walled_room;
    use cavecrawl::GameError;
    use cavecrawl::io::assets::TileCatalogue;
    use cavecrawl::io::configuration::SPAWN_EXCLUSION_RADIUS;
    use cavecrawl::simulation::actor::EnemyKind;
    use cavecrawl::simulation::spawning::{choose_enemy_kind, choose_spawn_site};
    use cavecrawl::spatial::level::{LevelConfig, LevelGrid};
    use cavecrawl::spatial::tile::{Plane, TileCode, TileFlags, TileKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn to_tile(pixel: f64) -> i32 {
        (pixel / 16.0).floor() as i32
    }

    // Tests sites inside the exclusion square are never chosen
    #[test]
    fn test_site_outside_exclusion() {
        let level = walled_room(6, 6);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let site = choose_spawn_site(&level, [1, 1], 2, &mut rng)
                .expect("in bounds")
                .expect("candidates exist");
            let (x, y) = (to_tile(site.x), to_tile(site.y));
            assert!(x == 4 || y == 4, "({x}, {y})");
            assert!((1..=4).contains(&x) && (1..=4).contains(&y));
        }
    }

    // Tests occupied foreground cells are skipped
    #[test]
    fn test_site_requires_empty_foreground() {
        let mut level = walled_room(6, 6);
        let mut rng = StdRng::seed_from_u64(0);
        for [x, y] in [[4, 1], [4, 2], [4, 3], [1, 4], [2, 4], [3, 4]] {
            level
                .place_tile(
                    [x, y],
                    TileCode::new(TileKind::Stone, 0),
                    Plane::Foreground,
                    TileFlags::SOLID,
                    &mut rng,
                )
                .expect("in bounds");
        }

        for _ in 0..10 {
            let site = choose_spawn_site(&level, [1, 1], 2, &mut rng)
                .expect("in bounds")
                .expect("one candidate left");
            assert_eq!((to_tile(site.x), to_tile(site.y)), (4, 4));
        }
    }

    #[test]
    fn test_no_site_returns_none() {
        let level = walled_room(6, 6);
        let mut rng = StdRng::seed_from_u64(0);

        let site = choose_spawn_site(&level, [2, 2], SPAWN_EXCLUSION_RADIUS, &mut rng)
            .expect("in bounds");
        assert!(site.is_none());
    }

    #[test]
    fn test_player_outside_level() {
        let level = walled_room(6, 6);
        let mut rng = StdRng::seed_from_u64(0);

        let result = choose_spawn_site(&level, [-1, 3], 2, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::OutOfBounds {
                operation: "choose_spawn_site",
                ..
            })
        ));
    }

    #[test]
    fn test_generated_level_has_distant_site() {
        let level = LevelGrid::generated(LevelConfig::default(), TileCatalogue::standard(16), 7)
            .expect("valid config");
        let mut rng = StdRng::seed_from_u64(7);
        let player = [31, 31];

        let site = choose_spawn_site(&level, player, SPAWN_EXCLUSION_RADIUS, &mut rng)
            .expect("in bounds")
            .expect("large cave has free floor");
        let (x, y) = (to_tile(site.x), to_tile(site.y));
        assert!(
            (x - player[0]).abs() > SPAWN_EXCLUSION_RADIUS
                || (y - player[1]).abs() > SPAWN_EXCLUSION_RADIUS
        );
        assert!(level.get_tile([x, y], Plane::Foreground).expect("in bounds").is_none());
    }

    // Tests enemy variants follow the spawn weights
    #[test]
    fn test_enemy_distribution() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        let draws = 10_000;

        for _ in 0..draws {
            let slot = match choose_enemy_kind(&mut rng) {
                EnemyKind::Hornet => 0,
                EnemyKind::Beetle => 1,
                EnemyKind::Spider => 2,
            };
            if let Some(count) = counts.get_mut(slot) {
                *count += 1;
            }
        }

        let share = |count: usize| count as f64 / f64::from(draws);
        assert!((share(counts[0]) - 0.7).abs() < 0.03);
        assert!((share(counts[1]) - 0.05).abs() < 0.02);
        assert!((share(counts[2]) - 0.25).abs() < 0.03);
    }
}

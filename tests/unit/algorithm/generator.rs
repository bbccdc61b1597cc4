//! Tests for the carve, smooth and classify pipeline

#[cfg(test)]
mod tests {
    use cavecrawl::algorithm::generator::{GenerationConfig, generate_blueprint, generate_mazes};
    use cavecrawl::algorithm::maze::Cell;
    use cavecrawl::algorithm::smoothing::SmoothingParams;
    use cavecrawl::io::configuration::{
        BACKGROUND_PASS, FOREGROUND_FINE_PASS, FOREGROUND_ROUGH_PASS,
    };
    use cavecrawl::spatial::grid::in_border;
    use cavecrawl::spatial::tile::{TileCode, TileKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_schedule() {
        let config = GenerationConfig::default();
        assert_eq!((config.width, config.height, config.border), (62, 62, 2));
        assert_eq!(
            config.foreground_passes,
            vec![FOREGROUND_ROUGH_PASS, FOREGROUND_FINE_PASS]
        );
        assert_eq!(config.background_pass, BACKGROUND_PASS);
    }

    // Tests both planes keep the solid border after smoothing
    // Verified by smoothing the background without a border
    #[test]
    fn test_generate_mazes_keeps_border_on_both_planes() {
        let config = GenerationConfig::with_size(40, 32, 2);
        let mut rng = StdRng::seed_from_u64(17);
        let mazes = generate_mazes(&config, &mut rng).expect("valid config");

        for maze in [&mazes.foreground, &mazes.background] {
            assert_eq!(maze.dim(), (32, 40));
            for ((row, col), cell) in maze.indexed_iter() {
                if in_border([row, col], (32, 40), 2) {
                    assert_eq!(*cell, Cell::Wall);
                }
            }
        }
    }

    #[test]
    fn test_invalid_sizes_and_params_fail() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_mazes(&GenerationConfig::with_size(41, 32, 2), &mut rng).is_err());

        let mut config = GenerationConfig::with_size(20, 20, 2);
        config.background_pass = SmoothingParams {
            stop_air: 12,
            ..BACKGROUND_PASS
        };
        assert!(generate_mazes(&config, &mut rng).is_err());
    }

    // Tests the blueprint has border caps and only valid floor kinds
    #[test]
    fn test_generate_blueprint_layers() {
        let config = GenerationConfig::with_size(30, 30, 2);
        let mut rng = StdRng::seed_from_u64(23);
        let blueprint = generate_blueprint(&config, &mut rng).expect("valid config");

        assert_eq!(blueprint.foreground.dim(), (30, 30));
        assert_eq!(blueprint.background.dim(), (30, 30));
        assert_eq!(
            blueprint.foreground.get([0, 0]),
            Some(&TileCode::random(TileKind::WallTop))
        );
        assert!(
            blueprint
                .background
                .iter()
                .all(|code| matches!(code.kind, TileKind::StoneFloor | TileKind::DirtFloor))
        );
        assert!(blueprint.foreground.iter().any(TileCode::is_none));
    }

    #[test]
    fn test_generate_blueprint_is_deterministic() {
        let config = GenerationConfig::default();
        let first = generate_blueprint(&config, &mut StdRng::seed_from_u64(5)).expect("valid");
        let second = generate_blueprint(&config, &mut StdRng::seed_from_u64(5)).expect("valid");
        assert_eq!(first, second);
    }
}

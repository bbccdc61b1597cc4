//! Tests for configuration constants consistency

#[cfg(test)]
mod tests {
    use cavecrawl::io::configuration::{
        BACKGROUND_PASS, DEFAULT_BORDER, DEFAULT_LEVEL_HEIGHT, DEFAULT_LEVEL_WIDTH,
        DIRT_FLOOR_WEIGHTS, ENEMY_SPAWN_WEIGHTS, FOREGROUND_FINE_PASS, FOREGROUND_ROUGH_PASS,
        HITBOX_MARGIN, MAX_LEVEL_DIMENSION, STONE_FLOOR_WEIGHTS,
    };

    // Tests default level geometry satisfies the carver's even-size rules
    #[test]
    fn test_default_dimensions_are_even() {
        assert_eq!(DEFAULT_LEVEL_WIDTH % 2, 0);
        assert_eq!(DEFAULT_LEVEL_HEIGHT % 2, 0);
        assert_eq!(DEFAULT_BORDER % 2, 0);
        assert!(DEFAULT_BORDER < DEFAULT_LEVEL_WIDTH.min(DEFAULT_LEVEL_HEIGHT) / 2);
        assert!(DEFAULT_LEVEL_WIDTH <= MAX_LEVEL_DIMENSION);
        // Odd half sizes keep the carved maze connected after border enforcement
        assert_eq!((DEFAULT_LEVEL_WIDTH / 2) % 2, 1);
    }

    #[test]
    fn test_smoothing_passes_are_valid() {
        for pass in [FOREGROUND_ROUGH_PASS, FOREGROUND_FINE_PASS, BACKGROUND_PASS] {
            assert!(pass.validate().is_ok());
        }
    }

    // Tests weight tables sum to one
    #[test]
    fn test_weight_tables_are_normalized() {
        let tables = [&STONE_FLOOR_WEIGHTS[..], &DIRT_FLOOR_WEIGHTS[..], &ENEMY_SPAWN_WEIGHTS[..]];
        for weights in tables {
            let total: f64 = weights.iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
        }
    }

    #[test]
    fn test_hitbox_margin_is_positive() {
        assert!(HITBOX_MARGIN > 0);
    }
}

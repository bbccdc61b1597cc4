//! Weighted and percentage-style random draws used by the generators

use rand::Rng;

/// Generic weighted random selection
///
/// Returns an index into `weights` using the cumulative distribution. Weights
/// need not sum to one. A non-positive total always selects index 0.
pub fn weighted_choice<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut rand_val = rng.random::<f64>() * total;
    for (i, &weight) in weights.iter().enumerate() {
        rand_val -= weight;
        if rand_val <= 0.0 {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}

/// Roll a d10 and report whether it beats `stop`
///
/// `stop = 0` always passes, `stop = 10` never does, so a cell flips with
/// probability `(10 - stop) / 10`.
pub fn passes_stop_roll<R: Rng + ?Sized>(rng: &mut R, stop: u8) -> bool {
    rng.random_range(1..=10u8) > stop
}

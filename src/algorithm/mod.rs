/// Rule-based tile classification for both planes
pub mod classifier;
/// Flood-fill reachability checks
pub mod connectivity;
/// Blueprint pipeline orchestrating carve, smooth and classify
pub mod generator;
/// Randomized depth-first maze carving
pub mod maze;
/// Cellular-automaton smoothing passes
pub mod smoothing;

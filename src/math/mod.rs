//! Random draws shared by generation and spawning

/// Weighted selection and stop-roll draws
pub mod probability;

//! Mathematical utilities for the morph pipeline

/// Batched pairwise distance computation
pub mod distance;
/// Endpoint-exact linear interpolation and easing curves
pub mod interpolation;

//! Trajectory interpolation, frame timing, rendering, and pipeline orchestration

/// Configuration, validation, and end-to-end morph orchestration
pub mod pipeline;
/// Rasterization of trajectory sets into frame images
pub mod renderer;
/// Frame clock: time samples and easing
pub mod timeline;
/// Per-cell interpolated paths over animation time
pub mod trajectory;

pub use pipeline::{Morph, MorphConfig, SolverChoice, prepare};
pub use renderer::{CellShape, FrameRenderer, OpacityCurve, RenderOptions};
pub use timeline::{Easing, Timeline};
pub use trajectory::{Trajectory, build_trajectories};

//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Pipeline constants and configuration defaults
pub mod configuration;
/// Error types for morph pipeline operations
pub mod error;
/// Animated GIF assembly from rendered frames
pub mod gif;
/// Image loading and per-frame PNG export
pub mod image;
/// Frame rendering progress display
pub mod progress;

//! Pipeline constants and runtime configuration defaults

/// Default grid resolution (cells per side)
pub const DEFAULT_RESOLUTION: usize = 64;

/// Default balance between position and color fidelity
pub const DEFAULT_PROXIMITY_IMPORTANCE: f64 = 0.3;

/// Default animation length in seconds
pub const DEFAULT_DURATION_SECS: f64 = 6.0;

/// Default frames per second
pub const DEFAULT_FPS: u32 = 30;

/// Default frame count (duration × fps)
pub const DEFAULT_FRAME_COUNT: usize = 180;

/// Default output pixels per grid cell
pub const DEFAULT_CELL_PIXEL_SIZE: usize = 8;

// The exact solver is O(n³) in n = resolution²; past this point a single
// run takes hours
/// Largest resolution the CLI allows for the exact solver
pub const MAX_OPTIMAL_RESOLUTION: usize = 80;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid resolution
pub const MAX_RESOLUTION: usize = 512;

/// Fixed seed for reproducible jitter
pub const DEFAULT_SEED: u64 = 42;

/// Default seconds to hold the first frame
pub const DEFAULT_HOLD_START_SECS: f64 = 1.0;

/// Default seconds to hold the last frame
pub const DEFAULT_HOLD_END_SECS: f64 = 2.0;

/// Minimum frame delay that GIF viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

/// Default output path for the rendered animation
pub const DEFAULT_OUTPUT_PATH: &str = "outputs/morph.gif";

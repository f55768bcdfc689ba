//! Frame clock: time samples and easing
//!
//! Maps frame indices onto animation time: t_k = k / (F - 1) for F frames,
//! optionally reshaped by an easing curve. A single-frame timeline samples
//! t = 1 so it shows the completed morph.

use crate::io::error::{Result, invalid_parameter};
use crate::math::interpolation::smoothstep;

/// Easing applied to the animation clock
///
/// Both curves fix 0 and 1, preserving the boundary-exactness of the first
/// and last frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Uniform clock
    Linear,
    /// Smoothstep: slow start and finish
    #[default]
    SmoothStep,
}

impl Easing {
    /// Reshape a clock value in [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => smoothstep(t),
        }
    }
}

/// Evenly spaced time samples over a fixed frame count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    frame_count: usize,
    easing: Easing,
}

impl Timeline {
    /// Create a timeline over `frame_count` frames
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `frame_count` is zero.
    pub fn new(frame_count: usize, easing: Easing) -> Result<Self> {
        if frame_count == 0 {
            return Err(invalid_parameter(
                "frame_count",
                &frame_count,
                &"animation needs at least one frame",
            ));
        }
        Ok(Self { frame_count, easing })
    }

    /// Number of frames in the animation
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Eased time value for frame `index`
    ///
    /// Indices past the end clamp to the final frame's time.
    pub fn frame_time(&self, index: usize) -> f64 {
        if self.frame_count == 1 {
            return self.easing.apply(1.0);
        }
        let index = index.min(self.frame_count - 1);
        let t = index as f64 / (self.frame_count - 1) as f64;
        self.easing.apply(t)
    }

    /// All frame times in index order
    pub fn frame_times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.frame_count).map(|index| self.frame_time(index))
    }
}

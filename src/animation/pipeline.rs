//! Configuration, validation, and end-to-end morph orchestration
//!
//! A run is a pure function of (source image, target image, configuration):
//! sample both grids, build the cost matrix, solve the assignment, derive
//! trajectories, then render frames on demand. All parameters are validated
//! eagerly before any sampling or cost work begins, and nothing here holds
//! ambient process state.

use crate::animation::renderer::{FrameRenderer, RenderOptions};
use crate::animation::timeline::{Easing, Timeline};
use crate::animation::trajectory::{Trajectory, build_trajectories};
use crate::assignment::cost::build_cost_matrix;
use crate::assignment::rank::rank_assignment;
use crate::assignment::solver::{Algorithm, Assignment, solve};
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_PROXIMITY_IMPORTANCE, DEFAULT_RESOLUTION,
};
use crate::io::error::{MorphError, Result, invalid_parameter};
use crate::spatial::sampler::sample_grid;
use image::RgbImage;

/// Assignment strategy selected for a run
///
/// The first three dispatch through the cost matrix; `Rank` is the
/// matrix-free luminance fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverChoice {
    /// Exact minimum-cost matching
    #[default]
    Optimal,
    /// Globally cheapest remaining pair
    Greedy,
    /// Row-major ordered greedy
    Approx,
    /// Luminance rank matching, no cost matrix
    Rank,
}

impl SolverChoice {
    /// The matrix solver this choice maps to, if any
    pub const fn matrix_algorithm(self) -> Option<Algorithm> {
        match self {
            Self::Optimal => Some(Algorithm::Optimal),
            Self::Greedy => Some(Algorithm::Greedy),
            Self::Approx => Some(Algorithm::Approx),
            Self::Rank => None,
        }
    }
}

/// Full configuration of one morph run
#[derive(Debug, Clone, PartialEq)]
pub struct MorphConfig {
    /// Grid cells per side
    pub resolution: usize,
    /// Cost weight between position and color fidelity, in [0, 1]
    pub proximity_importance: f64,
    /// Assignment strategy
    pub solver: SolverChoice,
    /// Number of frames to render
    pub frame_count: usize,
    /// Easing applied to the frame clock
    pub easing: Easing,
    /// Draw-time rendering options
    pub render: RenderOptions,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            proximity_importance: DEFAULT_PROXIMITY_IMPORTANCE,
            solver: SolverChoice::default(),
            frame_count: DEFAULT_FRAME_COUNT,
            easing: Easing::default(),
            render: RenderOptions::default(),
        }
    }
}

impl MorphConfig {
    /// Check every parameter against its accepted range
    ///
    /// Out-of-range values fail here, before any stage runs; nothing is
    /// clamped silently.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` for a zero resolution and
    /// `InvalidParameter` for an out-of-range weight, a zero frame count, or
    /// invalid render options.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(MorphError::InvalidResolution {
                value: self.resolution,
                reason: "grid resolution must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.proximity_importance) || self.proximity_importance.is_nan()
        {
            return Err(invalid_parameter(
                "proximity_importance",
                &self.proximity_importance,
                &"must lie in [0, 1]",
            ));
        }
        if self.frame_count == 0 {
            return Err(invalid_parameter(
                "frame_count",
                &self.frame_count,
                &"animation needs at least one frame",
            ));
        }
        self.render.validate()
    }

    /// Side length of output frames in pixels
    pub const fn canvas_size(&self) -> usize {
        self.resolution * self.render.cell_pixel_size
    }
}

/// A prepared morph: solved assignment plus everything needed to render
#[derive(Debug, Clone)]
pub struct Morph {
    assignment: Assignment,
    trajectories: Vec<Trajectory>,
    timeline: Timeline,
    renderer: FrameRenderer,
}

impl Morph {
    /// Number of frames in the animation
    pub const fn frame_count(&self) -> usize {
        self.timeline.frame_count()
    }

    /// Side length of rendered frames in pixels
    pub const fn canvas_size(&self) -> usize {
        self.renderer.canvas_size()
    }

    /// The solved source-to-target assignment
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// The per-cell trajectories
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Render the frame at `index`
    pub fn render_frame(&self, index: usize) -> RgbImage {
        self.renderer
            .render(&self.trajectories, self.timeline.frame_time(index))
    }

    /// Render all frames in index order
    pub fn frames(&self) -> impl Iterator<Item = RgbImage> + '_ {
        (0..self.frame_count()).map(|index| self.render_frame(index))
    }
}

/// Run the pipeline up to a renderable morph
///
/// Sampling, cost construction, and solving happen once here; the returned
/// `Morph` renders any frame independently afterwards.
///
/// # Errors
///
/// Propagates configuration validation, sampling, cost-model, and solver
/// errors.
pub fn prepare(source: &RgbImage, target: &RgbImage, config: &MorphConfig) -> Result<Morph> {
    config.validate()?;

    let source_grid = sample_grid(source, config.resolution)?;
    let target_grid = sample_grid(target, config.resolution)?;

    let assignment = if let Some(algorithm) = config.solver.matrix_algorithm() {
        let matrix = build_cost_matrix(&source_grid, &target_grid, config.proximity_importance)?;
        solve(&matrix, algorithm)?
    } else {
        rank_assignment(&source_grid, &target_grid)?
    };

    let trajectories = build_trajectories(&source_grid, &target_grid, &assignment);
    let timeline = Timeline::new(config.frame_count, config.easing)?;
    let renderer = FrameRenderer::new(config.resolution, trajectories.len(), config.render.clone())?;

    Ok(Morph {
        assignment,
        trajectories,
        timeline,
        renderer,
    })
}

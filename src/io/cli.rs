//! Command-line interface for generating morph animations

use crate::animation::pipeline::{Morph, MorphConfig, SolverChoice, prepare};
use crate::animation::renderer::{CellShape, OpacityCurve, RenderOptions};
use crate::animation::timeline::Easing;
use crate::io::configuration::{
    DEFAULT_CELL_PIXEL_SIZE, DEFAULT_DURATION_SECS, DEFAULT_FPS, DEFAULT_HOLD_END_SECS,
    DEFAULT_HOLD_START_SECS, DEFAULT_OUTPUT_PATH, DEFAULT_PROXIMITY_IMPORTANCE,
    DEFAULT_RESOLUTION, DEFAULT_SEED, MAX_OPTIMAL_RESOLUTION, MAX_RESOLUTION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::{gif, image as frame_io};
use clap::{Parser, ValueEnum};
use image::RgbImage;
use std::path::PathBuf;
use std::time::Instant;

/// Assignment algorithm selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Exact minimum-cost matching (slow above moderate resolutions)
    Optimal,
    /// Globally cheapest remaining pair
    Greedy,
    /// Row-major ordered greedy
    Approx,
    /// Luminance rank matching (fastest, no cost matrix)
    Sort,
}

impl AlgorithmArg {
    const fn solver_choice(self) -> SolverChoice {
        match self {
            Self::Optimal => SolverChoice::Optimal,
            Self::Greedy => SolverChoice::Greedy,
            Self::Approx => SolverChoice::Approx,
            Self::Sort => SolverChoice::Rank,
        }
    }
}

/// Particle shape selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// Filled cell-sized rectangle
    Square,
    /// Filled disc
    Circle,
    /// Four small discs per cell
    Cluster,
}

impl ShapeArg {
    const fn cell_shape(self) -> CellShape {
        match self {
            Self::Square => CellShape::Square,
            Self::Circle => CellShape::Circle,
            Self::Cluster => CellShape::Cluster,
        }
    }
}

/// Preset render configurations
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Use the individual flags as given
    Custom,
    /// Fine grain, rank matching, drifting circles
    Sand,
    /// Coarse grid, exact matching, rigid squares
    Blocks,
    /// Medium grid, greedy matching, breathing circles
    Bubbles,
}

#[derive(Parser)]
#[command(name = "surrafication")]
#[command(
    author,
    version,
    about = "Rearrange one image's cells into another as an animated morph"
)]
/// Command-line arguments for the morph animation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image whose cells travel
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Target image the cells reassemble into
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output GIF path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Grid resolution in cells per side
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Cost weight between position and color: 0.0 = color only, 1.0 = position only
    #[arg(short, long, default_value_t = DEFAULT_PROXIMITY_IMPORTANCE)]
    pub proximity_importance: f64,

    /// Assignment algorithm
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Optimal)]
    pub algorithm: AlgorithmArg,

    /// Animation duration in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: f64,

    /// Frames per second
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Output pixels per grid cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXEL_SIZE)]
    pub cell_size: usize,

    /// Particle shape
    #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
    pub shape: ShapeArg,

    /// Particle side relative to its cell, in (0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub particle_scale: f64,

    /// Maximum particle jitter in normalized canvas units
    #[arg(long, default_value_t = 0.0)]
    pub jitter: f64,

    /// Fade particles toward the background mid-flight
    #[arg(long)]
    pub breathe: bool,

    /// Advance the animation clock uniformly instead of easing
    #[arg(long)]
    pub linear: bool,

    /// Seconds to hold the first frame
    #[arg(long, default_value_t = DEFAULT_HOLD_START_SECS)]
    pub hold_start: f64,

    /// Seconds to hold the last frame
    #[arg(long, default_value_t = DEFAULT_HOLD_END_SECS)]
    pub hold_end: f64,

    /// Seed for jitter offsets
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Apply a preset configuration
    #[arg(long, value_enum, default_value_t = PresetArg::Custom)]
    pub preset: PresetArg,

    /// Also export numbered PNG frames into this directory
    #[arg(long, value_name = "DIR")]
    pub frames_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

// Preset-resolved knobs that feed the pipeline configuration
struct RunSettings {
    resolution: usize,
    algorithm: AlgorithmArg,
    shape: CellShape,
    particle_scale: f64,
    jitter: f64,
    opacity: OpacityCurve,
}

/// Orchestrates a single morph run from parsed arguments
pub struct MorphProcessor {
    cli: Cli,
}

impl MorphProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load both images, run the pipeline, and write the animation
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, image loading, assignment,
    /// or export fails.
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let settings = self.effective_settings();

        if settings.resolution > MAX_RESOLUTION {
            return Err(invalid_parameter(
                "resolution",
                &settings.resolution,
                &format!("must not exceed {MAX_RESOLUTION}"),
            ));
        }

        let algorithm = self.cap_optimal(settings.algorithm, settings.resolution);
        let frame_count = self.frame_count()?;

        let config = MorphConfig {
            resolution: settings.resolution,
            proximity_importance: self.cli.proximity_importance,
            solver: algorithm.solver_choice(),
            frame_count,
            easing: if self.cli.linear {
                Easing::Linear
            } else {
                Easing::SmoothStep
            },
            render: RenderOptions {
                cell_pixel_size: self.cli.cell_size,
                shape: settings.shape,
                particle_scale: settings.particle_scale,
                jitter: settings.jitter,
                opacity: settings.opacity,
                background: [0, 0, 0],
                seed: self.cli.seed,
            },
        };
        config.validate()?;

        let working_size = config.canvas_size() as u32;
        let source = frame_io::load_image(&self.cli.source, working_size)?;
        let target = frame_io::load_image(&self.cli.target, working_size)?;

        let morph = prepare(&source, &target, &config)?;
        let frames = self.render_frames(&morph);

        if let Some(frames_dir) = self.cli.frames_dir.clone() {
            for (index, frame) in frames.iter().enumerate() {
                let path = frames_dir.join(format!("frame_{index:04}.png"));
                frame_io::export_frame_png(frame, &path)?;
            }
        }

        gif::export_gif(
            frames,
            self.cli.fps,
            self.cli.hold_start,
            self.cli.hold_end,
            &self.cli.output,
        )?;

        self.report_done(start_time.elapsed().as_secs_f64());
        Ok(())
    }

    fn render_frames(&self, morph: &Morph) -> Vec<RgbImage> {
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(morph.frame_count()));

        let frames = morph
            .frames()
            .inspect(|_| {
                if let Some(ref pm) = progress {
                    pm.frame_done();
                }
            })
            .collect();

        if let Some(ref pm) = progress {
            pm.finish();
        }

        frames
    }

    fn frame_count(&self) -> Result<usize> {
        if !self.cli.duration.is_finite() || self.cli.duration <= 0.0 {
            return Err(invalid_parameter(
                "duration",
                &self.cli.duration,
                &"must be a positive number of seconds",
            ));
        }
        if self.cli.fps == 0 {
            return Err(invalid_parameter(
                "fps",
                &self.cli.fps,
                &"frame rate must be positive",
            ));
        }

        let frame_count = (self.cli.duration * f64::from(self.cli.fps)).round() as usize;
        if frame_count == 0 {
            return Err(invalid_parameter(
                "duration",
                &self.cli.duration,
                &"duration and fps must yield at least one frame",
            ));
        }
        Ok(frame_count)
    }

    // Allow print for user feedback when the exact solver is capped
    #[allow(clippy::print_stderr)]
    fn cap_optimal(&self, algorithm: AlgorithmArg, resolution: usize) -> AlgorithmArg {
        if algorithm == AlgorithmArg::Optimal && resolution > MAX_OPTIMAL_RESOLUTION {
            if !self.cli.quiet {
                eprintln!(
                    "Resolution {resolution} is too large for the exact solver (cap: {MAX_OPTIMAL_RESOLUTION}); falling back to rank matching"
                );
            }
            AlgorithmArg::Sort
        } else {
            algorithm
        }
    }

    // Allow print for user feedback for the completion summary
    #[allow(clippy::print_stderr)]
    fn report_done(&self, elapsed_secs: f64) {
        if !self.cli.quiet {
            eprintln!(
                "Wrote {} in {elapsed_secs:.1}s",
                self.cli.output.display()
            );
        }
    }

    // Presets override the geometry flags; everything else stays as given
    fn effective_settings(&self) -> RunSettings {
        match self.cli.preset {
            PresetArg::Custom => RunSettings {
                resolution: self.cli.resolution,
                algorithm: self.cli.algorithm,
                shape: self.cli.shape.cell_shape(),
                particle_scale: self.cli.particle_scale,
                jitter: self.cli.jitter,
                opacity: if self.cli.breathe {
                    OpacityCurve::Breathing
                } else {
                    OpacityCurve::Solid
                },
            },
            PresetArg::Sand => RunSettings {
                resolution: 128,
                algorithm: AlgorithmArg::Sort,
                shape: CellShape::Circle,
                particle_scale: 0.5,
                jitter: 0.1,
                opacity: OpacityCurve::Solid,
            },
            PresetArg::Blocks => RunSettings {
                resolution: 32,
                algorithm: AlgorithmArg::Optimal,
                shape: CellShape::Square,
                particle_scale: 1.0,
                jitter: 0.0,
                opacity: OpacityCurve::Solid,
            },
            PresetArg::Bubbles => RunSettings {
                resolution: 64,
                algorithm: AlgorithmArg::Greedy,
                shape: CellShape::Circle,
                particle_scale: 0.8,
                jitter: 0.05,
                opacity: OpacityCurve::Breathing,
            },
        }
    }
}

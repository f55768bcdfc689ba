//! Rasterization of trajectory sets into frame images
//!
//! Evaluates every trajectory at a frame's time value and draws one filled
//! particle per cell onto an RGB canvas. Cell draws are independent of each
//! other and frames share no mutable state, so any frame can be rendered in
//! any order.
//!
//! Shape, scale, jitter and opacity are cosmetic draw-time parameters. With
//! the defaults (full-size squares, no jitter, solid opacity) the frames at
//! t = 0 and t = 1 reproduce the sampled source and target grids exactly;
//! jitter amplitude follows sin(πt), vanishing at both boundaries.

use crate::animation::trajectory::Trajectory;
use crate::io::configuration::{DEFAULT_CELL_PIXEL_SIZE, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use crate::math::interpolation::clamp_unit;
use image::{Rgb, RgbImage};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Particle shape drawn for each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellShape {
    /// Filled cell-sized rectangle
    #[default]
    Square,
    /// Filled disc inscribed in the cell
    Circle,
    /// Four small discs in a 2×2 arrangement
    Cluster,
}

/// Opacity of particles as a function of animation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpacityCurve {
    /// Fully opaque throughout
    #[default]
    Solid,
    /// Dips toward the background mid-flight, opaque at both boundaries
    Breathing,
}

impl OpacityCurve {
    /// Particle opacity in [0, 1] at time `t`
    pub fn opacity_at(self, t: f64) -> f64 {
        match self {
            Self::Solid => 1.0,
            Self::Breathing => 0.3f64.mul_add(-(std::f64::consts::PI * t).sin(), 1.0),
        }
    }
}

/// Draw-time rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output pixels per grid cell along each axis
    pub cell_pixel_size: usize,
    /// Particle shape
    pub shape: CellShape,
    /// Particle side relative to the cell, in (0, 1]
    pub particle_scale: f64,
    /// Maximum jitter displacement in normalized canvas units
    pub jitter: f64,
    /// Opacity curve applied at draw time
    pub opacity: OpacityCurve,
    /// Canvas background color
    pub background: [u8; 3],
    /// Seed for the per-cell jitter offsets
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
            shape: CellShape::Square,
            particle_scale: 1.0,
            jitter: 0.0,
            opacity: OpacityCurve::Solid,
            background: [0, 0, 0],
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderOptions {
    /// Check every option against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero cell size, a particle scale
    /// outside (0, 1], or a negative or non-finite jitter amplitude.
    pub fn validate(&self) -> Result<()> {
        if self.cell_pixel_size == 0 {
            return Err(invalid_parameter(
                "cell_pixel_size",
                &self.cell_pixel_size,
                &"cells need at least one output pixel",
            ));
        }
        if !(self.particle_scale > 0.0 && self.particle_scale <= 1.0) {
            return Err(invalid_parameter(
                "particle_scale",
                &self.particle_scale,
                &"must lie in (0, 1]",
            ));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(invalid_parameter(
                "jitter",
                &self.jitter,
                &"must be a non-negative finite amplitude",
            ));
        }
        Ok(())
    }
}

/// Renders trajectory sets onto a fixed-size canvas
///
/// Jitter offsets are drawn once from a seeded generator at construction, so
/// rendering itself is a pure function of (trajectories, t).
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    canvas_size: usize,
    particle_size: usize,
    options: RenderOptions,
    jitter_offsets: Vec<[f64; 2]>,
}

impl FrameRenderer {
    /// Create a renderer for `resolution × cell_pixel_size` square frames
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` for a zero resolution and propagates
    /// option validation failures.
    pub fn new(resolution: usize, trajectory_count: usize, options: RenderOptions) -> Result<Self> {
        options.validate()?;
        if resolution == 0 {
            return Err(crate::io::error::MorphError::InvalidResolution {
                value: resolution,
                reason: "canvas needs at least one grid cell".to_string(),
            });
        }

        let canvas_size = resolution * options.cell_pixel_size;
        let particle_size =
            ((options.cell_pixel_size as f64 * options.particle_scale).round() as usize).max(1);

        let jitter_offsets = if options.jitter > 0.0 {
            let mut rng = StdRng::seed_from_u64(options.seed);
            (0..trajectory_count)
                .map(|_| {
                    [
                        rng.random_range(-options.jitter..=options.jitter),
                        rng.random_range(-options.jitter..=options.jitter),
                    ]
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            canvas_size,
            particle_size,
            options,
            jitter_offsets,
        })
    }

    /// Side length of rendered frames in pixels
    pub const fn canvas_size(&self) -> usize {
        self.canvas_size
    }

    /// Render all trajectories at time `t` into a frame image
    ///
    /// `t` is clamped into [0, 1]. Frames with equal inputs are byte-identical.
    pub fn render(&self, trajectories: &[Trajectory], t: f64) -> RgbImage {
        let t = clamp_unit(t);
        let side = self.canvas_size as u32;
        let mut canvas = RgbImage::from_pixel(side, side, Rgb(self.options.background));

        let jitter_amplitude = (std::f64::consts::PI * t).sin();
        let opacity = self.options.opacity.opacity_at(t);

        for (index, trajectory) in trajectories.iter().enumerate() {
            let [mut y, mut x] = trajectory.position_at(t);
            if let Some(offset) = self.jitter_offsets.get(index) {
                y += offset[0] * jitter_amplitude;
                x += offset[1] * jitter_amplitude;
            }

            let center_y = y * self.canvas_size as f64;
            let center_x = x * self.canvas_size as f64;
            let color = self.blend(trajectory.color_at(t), opacity);

            match self.options.shape {
                CellShape::Square => {
                    self.fill_square(&mut canvas, center_x, center_y, self.particle_size, color);
                }
                CellShape::Circle => {
                    self.fill_circle(&mut canvas, center_x, center_y, self.particle_size, color);
                }
                CellShape::Cluster => {
                    let sub_size = (self.particle_size / 2).max(1);
                    let spread = self.particle_size as f64 / 4.0;
                    for (dy, dx) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
                        self.fill_circle(
                            &mut canvas,
                            spread.mul_add(dx, center_x),
                            spread.mul_add(dy, center_y),
                            sub_size,
                            color,
                        );
                    }
                }
            }
        }

        canvas
    }

    // Opacity blends the interpolated color toward the background
    fn blend(&self, color: [f64; 3], opacity: f64) -> Rgb<u8> {
        let mut blended = [0u8; 3];
        for (out, (&channel, &background)) in blended
            .iter_mut()
            .zip(color.iter().zip(self.options.background.iter()))
        {
            let mixed = opacity.mul_add(channel, (1.0 - opacity) * f64::from(background));
            *out = mixed.clamp(0.0, 255.0).round() as u8;
        }
        Rgb(blended)
    }

    fn fill_square(
        &self,
        canvas: &mut RgbImage,
        center_x: f64,
        center_y: f64,
        size: usize,
        color: Rgb<u8>,
    ) {
        let half = size as f64 / 2.0;
        let left = (center_x - half).round() as i64;
        let top = (center_y - half).round() as i64;

        for dy in 0..size as i64 {
            for dx in 0..size as i64 {
                self.put_clipped(canvas, left + dx, top + dy, color);
            }
        }
    }

    fn fill_circle(
        &self,
        canvas: &mut RgbImage,
        center_x: f64,
        center_y: f64,
        size: usize,
        color: Rgb<u8>,
    ) {
        let half = size as f64 / 2.0;
        let radius_squared = half * half;
        let left = (center_x - half).round() as i64;
        let top = (center_y - half).round() as i64;

        for dy in 0..size as i64 {
            for dx in 0..size as i64 {
                let px = left + dx;
                let py = top + dy;
                let offset_x = px as f64 + 0.5 - center_x;
                let offset_y = py as f64 + 0.5 - center_y;
                if offset_x.mul_add(offset_x, offset_y * offset_y) <= radius_squared {
                    self.put_clipped(canvas, px, py, color);
                }
            }
        }
    }

    fn put_clipped(&self, canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
        let side = self.canvas_size as i64;
        if x >= 0 && y >= 0 && x < side && y < side {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

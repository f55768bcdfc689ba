//! Per-cell interpolated paths over animation time
//!
//! One trajectory per source cell: position and color travel linearly from
//! the source cell's descriptor to the descriptor of the target cell its
//! assignment selected. Trajectories are stateless functions of t; evaluating
//! at 0 reproduces the source cell exactly and at 1 the target cell exactly.

use crate::assignment::solver::Assignment;
use crate::math::interpolation::{clamp_unit, lerp};
use crate::spatial::CellGrid;

/// The interpolated path of one cell across the animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    /// Normalized (y, x) position at t = 0
    pub start_position: [f64; 2],
    /// Normalized (y, x) position at t = 1
    pub end_position: [f64; 2],
    /// Channel intensities at t = 0, in [0, 255]
    pub start_color: [f64; 3],
    /// Channel intensities at t = 1, in [0, 255]
    pub end_color: [f64; 3],
}

impl Trajectory {
    /// Interpolated position at time `t`
    ///
    /// `t` is clamped into [0, 1] before evaluation.
    pub fn position_at(&self, t: f64) -> [f64; 2] {
        let t = clamp_unit(t);
        [
            lerp(self.start_position[0], self.end_position[0], t),
            lerp(self.start_position[1], self.end_position[1], t),
        ]
    }

    /// Interpolated color at time `t`
    ///
    /// `t` is clamped into [0, 1] before evaluation.
    pub fn color_at(&self, t: f64) -> [f64; 3] {
        let t = clamp_unit(t);
        [
            lerp(self.start_color[0], self.end_color[0], t),
            lerp(self.start_color[1], self.end_color[1], t),
            lerp(self.start_color[2], self.end_color[2], t),
        ]
    }
}

/// Build one trajectory per source cell from an assignment
///
/// Source cell i travels to the slot of target cell σ(i). Pairs whose target
/// index falls outside the target grid are skipped; the assignment invariant
/// guarantees this never happens for grids of matching size.
pub fn build_trajectories(
    source: &CellGrid,
    target: &CellGrid,
    assignment: &Assignment,
) -> Vec<Trajectory> {
    source
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(i, source_cell)| {
            let target_index = assignment.target_of(i)?;
            let target_cell = target.cells().get(target_index)?;
            Some(Trajectory {
                start_position: source_cell.position,
                end_position: target_cell.position,
                start_color: source_cell.color,
                end_color: target_cell.color,
            })
        })
        .collect()
}

//! Exact minimum-cost matching via Kuhn–Munkres
//!
//! Costs are scaled into fixed-point i64 (the matching crate requires ordered
//! integer weights) and handed to `kuhn_munkres_min`. The algorithm scans
//! candidate edges in ascending index order, so equal-cost alternatives
//! resolve to the lexicographically smallest indices; this tie rule is stable
//! across runs and documented here for reproducibility.
//!
//! O(n³) in the slot count n = resolution², the reason the CLI caps this
//! variant at moderate resolutions.

use crate::assignment::cost::CostMatrix;
use ndarray::Array2;
use pathfinding::prelude::{Weights, kuhn_munkres_min};

/// Fixed-point scale for costs in [0, 1]; nine digits survive the rounding
const COST_SCALE: f64 = 1e9;

struct ScaledCosts {
    values: Array2<i64>,
}

impl ScaledCosts {
    fn new(matrix: &CostMatrix) -> Self {
        Self {
            values: matrix.values().mapv(|cost| (cost * COST_SCALE).round() as i64),
        }
    }
}

impl Weights<i64> for ScaledCosts {
    fn rows(&self) -> usize {
        self.values.nrows()
    }

    fn columns(&self) -> usize {
        self.values.ncols()
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.values.get([row, col]).copied().unwrap_or(0)
    }

    fn neg(&self) -> Self {
        Self {
            values: self.values.mapv(|value| -value),
        }
    }
}

/// Minimum-total-cost perfect matching
///
/// Returns the target slot for each source cell in order. The caller
/// guarantees a non-empty square matrix.
pub fn solve(matrix: &CostMatrix) -> Vec<usize> {
    let (_total, targets) = kuhn_munkres_min(&ScaledCosts::new(matrix));
    targets
}

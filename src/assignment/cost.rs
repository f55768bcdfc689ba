//! Convex-combination cost model over position and color distance
//!
//! cost(i, j) = w · posDist(i, j) + (1 - w) · colorDist(i, j), with both
//! distances normalized into [0, 1] before weighting so w is a true convex
//! combination. Construction is batched: two Gram-expansion distance matrices
//! and one elementwise combine, no nested scalar loops.

use crate::io::error::{Result, invalid_parameter};
use crate::math::distance::normalized_distances;
use crate::spatial::CellGrid;
use ndarray::{Array2, Zip};

/// Squared diagonal of the RGB cube, the largest possible color distance
const COLOR_MAX_SQUARED: f64 = 255.0 * 255.0 * 3.0;

/// Squared diagonal of the unit square, the largest possible position distance
const POSITION_MAX_SQUARED: f64 = 2.0;

/// All pairwise costs between source cells and target slots
///
/// Square n×n matrix, n = resolution²; entry (i, j) is the cost of moving
/// source cell i into target slot j. All entries are finite and non-negative,
/// and the matrix is a deterministic function of the two grids and the
/// proximity-importance weight.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    values: Array2<f64>,
}

impl CostMatrix {
    /// Wrap a prebuilt cost matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the matrix is not square or contains a
    /// negative or non-finite entry.
    pub fn from_values(values: Array2<f64>) -> Result<Self> {
        if values.nrows() != values.ncols() {
            return Err(invalid_parameter(
                "cost matrix",
                &format!("{}x{}", values.nrows(), values.ncols()),
                &"cost matrix must be square",
            ));
        }
        if values.iter().any(|&cost| !cost.is_finite() || cost < 0.0) {
            return Err(invalid_parameter(
                "cost matrix",
                &"non-finite or negative entry",
                &"all costs must be finite and non-negative",
            ));
        }
        Ok(Self { values })
    }

    /// Number of cells on each side of the matrix
    pub fn n(&self) -> usize {
        self.values.nrows()
    }

    /// Cost of moving source cell `i` into target slot `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values.get([i, j]).copied().unwrap_or(f64::INFINITY)
    }

    /// The underlying matrix
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

/// Build the cost matrix between a source and a target grid
///
/// `proximity_importance` balances the two distance terms: 0 orders purely by
/// color, 1 purely by position. Validation happens before any distance work.
///
/// # Errors
///
/// Returns `InvalidParameter` if `proximity_importance` lies outside [0, 1]
/// (it is never clamped) or if the grids have differing cell counts.
pub fn build_cost_matrix(
    source: &CellGrid,
    target: &CellGrid,
    proximity_importance: f64,
) -> Result<CostMatrix> {
    if !(0.0..=1.0).contains(&proximity_importance) || proximity_importance.is_nan() {
        return Err(invalid_parameter(
            "proximity_importance",
            &proximity_importance,
            &"must lie in [0, 1]",
        ));
    }

    if source.len() != target.len() {
        return Err(invalid_parameter(
            "target grid",
            &target.len(),
            &format!("cell count must match the source grid ({})", source.len()),
        ));
    }

    let position_distances = normalized_distances(
        &source.positions(),
        &target.positions(),
        POSITION_MAX_SQUARED,
    );
    let color_distances =
        normalized_distances(&source.colors(), &target.colors(), COLOR_MAX_SQUARED);

    let mut costs = position_distances;
    Zip::from(&mut costs)
        .and(&color_distances)
        .for_each(|cost, &color| {
            *cost = proximity_importance.mul_add(*cost, (1.0 - proximity_importance) * color);
        });

    CostMatrix::from_values(costs)
}

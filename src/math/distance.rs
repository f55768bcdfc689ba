//! Batched pairwise distance computation
//!
//! Expands ‖a - b‖² as ‖a‖² + ‖b‖² - 2 a·bᵀ so the n×n distance matrix is one
//! matrix multiply plus an elementwise pass instead of nested scalar loops.

use ndarray::{Array1, Array2, Axis, Zip};

/// Pairwise squared Euclidean distances between the rows of `a` and `b`
///
/// `a` is n×d and `b` is m×d; the result is n×m with entry (i, j) equal to
/// ‖a_i - b_j‖². Rounding in the expansion can drive tiny values negative, so
/// entries are clamped at zero.
pub fn pairwise_squared_distances(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let a_norms: Array1<f64> = (a * a).sum_axis(Axis(1));
    let b_norms: Array1<f64> = (b * b).sum_axis(Axis(1));

    let mut distances = a.dot(&b.t());
    distances.mapv_inplace(|v| -2.0 * v);

    for (i, mut row) in distances.outer_iter_mut().enumerate() {
        let a_sq = a_norms.get(i).copied().unwrap_or(0.0);
        Zip::from(&mut row).and(&b_norms).for_each(|value, &b_sq| {
            *value = (*value + a_sq + b_sq).max(0.0);
        });
    }

    distances
}

/// Pairwise Euclidean distances normalized into [0, 1]
///
/// `max_squared` is the largest squared distance the row space admits (the
/// squared diagonal of its bounding box); every output entry is
/// sqrt(d² / max_squared).
pub fn normalized_distances(a: &Array2<f64>, b: &Array2<f64>, max_squared: f64) -> Array2<f64> {
    let mut distances = pairwise_squared_distances(a, b);
    distances.mapv_inplace(|d_sq| (d_sq / max_squared).sqrt());
    distances
}

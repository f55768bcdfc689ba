//! Matrix-free luminance rank matching
//!
//! Sorts both grids' cells by (luminance, row, column) and matches them
//! rank-by-rank: the darkest source cell travels to the darkest target slot,
//! and so on. O(n log n) with no cost matrix at all, which makes it the
//! fallback for resolutions where the exact solver is intractable. The
//! secondary position keys keep equal-luminance runs spatially coherent.

use crate::assignment::solver::Assignment;
use crate::io::error::{MorphError, Result, invalid_parameter};
use crate::spatial::CellGrid;

/// Match source cells to target slots by luminance rank
///
/// # Errors
///
/// Returns `SingularAssignment` for empty grids and `InvalidParameter` if the
/// grids have differing cell counts.
pub fn rank_assignment(source: &CellGrid, target: &CellGrid) -> Result<Assignment> {
    if source.len() != target.len() {
        return Err(invalid_parameter(
            "target grid",
            &target.len(),
            &format!("cell count must match the source grid ({})", source.len()),
        ));
    }

    if source.is_empty() {
        return Err(MorphError::SingularAssignment);
    }

    let source_order = luminance_order(source);
    let target_order = luminance_order(target);

    let mut targets = vec![0usize; source.len()];
    for (source_index, target_index) in source_order.into_iter().zip(target_order) {
        if let Some(slot) = targets.get_mut(source_index) {
            *slot = target_index;
        }
    }

    Assignment::from_targets(targets)
}

// Cell indices sorted by (luminance, row, col) ascending
fn luminance_order(grid: &CellGrid) -> Vec<usize> {
    let mut order: Vec<usize> = (0..grid.len()).collect();
    order.sort_by(|&a, &b| {
        let (cell_a, cell_b) = (grid.cells().get(a), grid.cells().get(b));
        match (cell_a, cell_b) {
            (Some(ca), Some(cb)) => ca
                .luminance()
                .total_cmp(&cb.luminance())
                .then_with(|| ca.row.cmp(&cb.row))
                .then_with(|| ca.col.cmp(&cb.col)),
            _ => a.cmp(&b),
        }
    });
    order
}

//! Row-major ordered greedy matching
//!
//! Processes source cells in grid order; each takes its cheapest
//! still-available target slot, ties going to the lowest slot index. O(n²),
//! knowingly suboptimal, and noticeably more spatially coherent than the
//! global greedy since early rows claim their neighborhoods first.

use crate::assignment::cost::CostMatrix;
use bitvec::prelude::*;

/// Ordered greedy matching
///
/// Returns the target slot for each source cell in order. The caller
/// guarantees a non-empty square matrix.
pub fn solve(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.n();
    let mut target_taken = bitvec![0; n];
    let mut targets = Vec::with_capacity(n);

    for i in 0..n {
        let mut best: Option<(f64, usize)> = None;

        for j in 0..n {
            if target_taken.get(j).as_deref() == Some(&true) {
                continue;
            }
            let cost = matrix.get(i, j);
            // Strict comparison keeps the lowest index among equal costs
            if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                best = Some((cost, j));
            }
        }

        if let Some((_, j)) = best {
            target_taken.set(j, true);
            targets.push(j);
        }
    }

    targets
}

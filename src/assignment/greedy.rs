//! Globally-cheapest-pair greedy matching
//!
//! Repeatedly commits the cheapest remaining (source, target) pair, retiring
//! its row and column, until every cell is assigned. One up-front sort of all
//! n² candidates replaces repeated matrix scans, giving O(n² log n).
//!
//! Ties break on (cost, source index, target index) ascending. The rule is
//! fixed and fully deterministic; no randomness enters the selection.

use crate::assignment::cost::CostMatrix;
use bitvec::prelude::*;

/// Greedy matching over the full candidate list
///
/// Returns the target slot for each source cell in order. The caller
/// guarantees a non-empty square matrix.
pub fn solve(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.n();

    let mut candidates: Vec<(f64, u32, u32)> = Vec::with_capacity(n * n);
    for ((i, j), &cost) in matrix.values().indexed_iter() {
        candidates.push((cost, i as u32, j as u32));
    }
    candidates.sort_unstable_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut source_taken = bitvec![0; n];
    let mut target_taken = bitvec![0; n];
    let mut targets = vec![0usize; n];
    let mut assigned = 0usize;

    for &(_, source, target) in &candidates {
        if assigned == n {
            break;
        }

        let (i, j) = (source as usize, target as usize);
        if source_taken.get(i).as_deref() == Some(&true)
            || target_taken.get(j).as_deref() == Some(&true)
        {
            continue;
        }

        source_taken.set(i, true);
        target_taken.set(j, true);
        if let Some(slot) = targets.get_mut(i) {
            *slot = j;
        }
        assigned += 1;
    }

    targets
}

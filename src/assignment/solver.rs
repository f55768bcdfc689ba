//! Algorithm selection and the assignment permutation type
//!
//! The three solver variants form a closed set behind one capability: produce
//! an `Assignment` from a `CostMatrix`. Callers can swap variants without
//! touching any other stage.

use crate::assignment::cost::CostMatrix;
use crate::assignment::{greedy, optimal, ordered};
use crate::io::error::{MorphError, Result, invalid_parameter};
use bitvec::prelude::*;

/// Assignment solver variants
///
/// All variants accept the same cost matrix and return a bijection; they
/// differ only in solution quality and running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Exact minimum-total-cost matching, O(n³) in the cell count
    Optimal,
    /// Globally cheapest remaining pair first, O(n² log n)
    Greedy,
    /// Row-major ordered greedy, O(n²); fastest, most spatially coherent
    Approx,
}

/// A bijection from source cell indices onto target slot indices
///
/// Invariant: the target vector is a permutation of 0..n; every source cell
/// is assigned and no target slot receives two cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    targets: Vec<usize>,
}

impl Assignment {
    /// Wrap a target vector, verifying the bijection invariant
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `targets` is not a permutation of its
    /// own index range.
    pub fn from_targets(targets: Vec<usize>) -> Result<Self> {
        let n = targets.len();
        let mut seen = bitvec![0; n];

        for &target in &targets {
            if target >= n || seen.get(target).as_deref() == Some(&true) {
                return Err(invalid_parameter(
                    "assignment",
                    &target,
                    &"targets must form a permutation",
                ));
            }
            seen.set(target, true);
        }

        Ok(Self { targets })
    }

    /// Target slot assigned to source cell `i`
    pub fn target_of(&self, i: usize) -> Option<usize> {
        self.targets.get(i).copied()
    }

    /// The full source-to-target mapping
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Number of assigned pairs
    pub const fn len(&self) -> usize {
        self.targets.len()
    }

    /// Test whether the assignment is degenerate
    pub const fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Total cost of this assignment under the given matrix
    pub fn total_cost(&self, matrix: &CostMatrix) -> f64 {
        self.targets
            .iter()
            .enumerate()
            .map(|(i, &j)| matrix.get(i, j))
            .sum()
    }
}

/// Solve the assignment problem for a cost matrix
///
/// Every variant is fully deterministic: reruns on the same matrix return the
/// same permutation, ties included.
///
/// # Errors
///
/// Returns `SingularAssignment` for an empty matrix (a degenerate zero-size
/// grid); all other square finite matrices always solve.
pub fn solve(matrix: &CostMatrix, algorithm: Algorithm) -> Result<Assignment> {
    if matrix.n() == 0 {
        return Err(MorphError::SingularAssignment);
    }

    let targets = match algorithm {
        Algorithm::Optimal => optimal::solve(matrix),
        Algorithm::Greedy => greedy::solve(matrix),
        Algorithm::Approx => ordered::solve(matrix),
    };

    Assignment::from_targets(targets)
}

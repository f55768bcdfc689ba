//! Cost matrix construction and assignment solvers
//!
//! Everything between sampled grids and trajectories: the pairwise cost
//! model, the three interchangeable matrix solvers, and the matrix-free
//! luminance rank fallback.

/// Convex-combination cost model over position and color distance
pub mod cost;
/// Globally-cheapest-pair greedy matching
pub mod greedy;
/// Exact minimum-cost matching via Kuhn–Munkres
pub mod optimal;
/// Row-major ordered greedy matching
pub mod ordered;
/// Matrix-free luminance rank matching
pub mod rank;
/// Algorithm selection and the assignment permutation type
pub mod solver;

pub use cost::{CostMatrix, build_cost_matrix};
pub use solver::{Algorithm, Assignment, solve};

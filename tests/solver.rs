//! Validates bijection, dominance, and determinism of the assignment solvers

use image::{Rgb, RgbImage};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use surrafication::MorphError;
use surrafication::assignment::cost::{CostMatrix, build_cost_matrix};
use surrafication::assignment::rank::rank_assignment;
use surrafication::assignment::solver::{Algorithm, Assignment, solve};
use surrafication::spatial::CellGrid;
use surrafication::spatial::sampler::sample_grid;

const ALL_ALGORITHMS: [Algorithm; 3] = [Algorithm::Optimal, Algorithm::Greedy, Algorithm::Approx];

fn matrix_from(values: Vec<f64>, n: usize) -> CostMatrix {
    let array = Array2::from_shape_vec((n, n), values).expect("square shape");
    CostMatrix::from_values(array).expect("valid cost matrix")
}

fn random_matrix(n: usize, seed: u64) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = Array2::from_shape_fn((n, n), |_| rng.random::<f64>());
    CostMatrix::from_values(values).expect("random costs are valid")
}

// Every cell mean is distinct: red ramps with x, green with y
fn gradient_image(side: u32) -> RgbImage {
    let mut img = RgbImage::new(side, side);
    for y in 0..side {
        for x in 0..side {
            let r = (x * 255 / (side - 1)) as u8;
            let g = (y * 255 / (side - 1)) as u8;
            img.put_pixel(x, y, Rgb([r, g, 128]));
        }
    }
    img
}

fn gradient_grid(side: u32, resolution: usize) -> CellGrid {
    sample_grid(&gradient_image(side), resolution).expect("sampling should succeed")
}

fn assert_bijection(assignment: &Assignment) {
    let mut targets: Vec<usize> = assignment.targets().to_vec();
    targets.sort_unstable();
    let expected: Vec<usize> = (0..assignment.len()).collect();
    assert_eq!(targets, expected, "targets must form a permutation");
}

#[test]
fn test_all_solvers_return_bijections() {
    let matrix = random_matrix(25, 11);
    for algorithm in ALL_ALGORITHMS {
        let assignment = solve(&matrix, algorithm).expect("solve should succeed");
        assert_eq!(assignment.len(), 25);
        assert_bijection(&assignment);
    }
}

#[test]
fn test_optimal_dominates_heuristics() {
    for seed in [3, 7, 19] {
        let matrix = random_matrix(16, seed);
        let optimal = solve(&matrix, Algorithm::Optimal).expect("optimal should succeed");
        let greedy = solve(&matrix, Algorithm::Greedy).expect("greedy should succeed");
        let approx = solve(&matrix, Algorithm::Approx).expect("approx should succeed");

        let optimal_cost = optimal.total_cost(&matrix);
        assert!(
            optimal_cost <= greedy.total_cost(&matrix) + 1e-6,
            "optimal must not exceed greedy (seed {seed})"
        );
        assert!(
            optimal_cost <= approx.total_cost(&matrix) + 1e-6,
            "optimal must not exceed approx (seed {seed})"
        );
    }
}

#[test]
fn test_identical_grids_give_zero_cost_identity() {
    let grid = gradient_grid(16, 4);
    let matrix = build_cost_matrix(&grid, &grid, 0.5).expect("cost matrix should build");

    let assignment = solve(&matrix, Algorithm::Optimal).expect("optimal should succeed");
    let identity: Vec<usize> = (0..grid.len()).collect();
    assert_eq!(assignment.targets(), identity.as_slice());
    assert!(assignment.total_cost(&matrix).abs() < 1e-12);
}

#[test]
fn test_position_priority_forces_minimal_displacement() {
    // Wildly different colors, but weight 1.0 scores position alone; the
    // identity is the unique zero-displacement permutation
    let source = gradient_grid(16, 4);
    let target = sample_grid(&RgbImage::from_pixel(16, 16, Rgb([0, 0, 255])), 4)
        .expect("sampling should succeed");

    let matrix = build_cost_matrix(&source, &target, 1.0).expect("cost matrix should build");
    let assignment = solve(&matrix, Algorithm::Optimal).expect("optimal should succeed");

    let identity: Vec<usize> = (0..source.len()).collect();
    assert_eq!(assignment.targets(), identity.as_slice());
    assert!(assignment.total_cost(&matrix).abs() < 1e-12);
}

#[test]
fn test_equal_cost_ties_stay_bijective_and_deterministic() {
    // Solid source and target make every pairing cost identical at weight 0
    let source = sample_grid(&RgbImage::from_pixel(8, 8, Rgb([255, 0, 0])), 4)
        .expect("sampling should succeed");
    let target = sample_grid(&RgbImage::from_pixel(8, 8, Rgb([0, 0, 255])), 4)
        .expect("sampling should succeed");
    let matrix = build_cost_matrix(&source, &target, 0.0).expect("cost matrix should build");

    for algorithm in ALL_ALGORITHMS {
        let first = solve(&matrix, algorithm).expect("solve should succeed");
        let second = solve(&matrix, algorithm).expect("solve should succeed");
        assert_bijection(&first);
        assert_eq!(first, second, "reruns must break ties identically");
    }
}

#[test]
fn test_greedy_commits_globally_cheapest_pair_first() {
    let matrix = matrix_from(vec![1.0, 2.0, 0.5, 10.0], 2);

    let greedy = solve(&matrix, Algorithm::Greedy).expect("greedy should succeed");
    assert_eq!(greedy.targets(), &[1, 0]);

    let approx = solve(&matrix, Algorithm::Approx).expect("approx should succeed");
    assert_eq!(approx.targets(), &[0, 1]);

    let optimal = solve(&matrix, Algorithm::Optimal).expect("optimal should succeed");
    assert!(optimal.total_cost(&matrix) <= greedy.total_cost(&matrix) + 1e-6);
}

#[test]
fn test_empty_matrix_fails_as_singular() {
    let matrix = CostMatrix::from_values(Array2::zeros((0, 0))).expect("empty matrix is square");
    for algorithm in ALL_ALGORITHMS {
        let err = solve(&matrix, algorithm).expect_err("empty grid must fail");
        assert!(matches!(err, MorphError::SingularAssignment));
    }
}

#[test]
fn test_out_of_range_weight_fails_before_any_cost_work() {
    let grid = gradient_grid(16, 4);
    for weight in [-0.1, 1.5, f64::NAN] {
        let err = build_cost_matrix(&grid, &grid, weight).expect_err("weight must be rejected");
        assert!(matches!(err, MorphError::InvalidParameter { .. }));
    }
}

#[test]
fn test_mismatched_grids_rejected() {
    let small = gradient_grid(16, 2);
    let large = gradient_grid(16, 4);
    let err = build_cost_matrix(&small, &large, 0.5).expect_err("size mismatch must fail");
    assert!(matches!(err, MorphError::InvalidParameter { .. }));
}

#[test]
fn test_rank_assignment_is_bijective_and_deterministic() {
    let source = gradient_grid(16, 4);
    let target = gradient_grid(32, 4);

    let first = rank_assignment(&source, &target).expect("rank matching should succeed");
    let second = rank_assignment(&source, &target).expect("rank matching should succeed");
    assert_bijection(&first);
    assert_eq!(first, second);
}

#[test]
fn test_rank_assignment_matches_identical_grids_identically() {
    // Distinct luminance per cell means rank matching a grid onto itself
    // must be the identity
    let grid = gradient_grid(16, 4);
    let assignment = rank_assignment(&grid, &grid).expect("rank matching should succeed");
    let identity: Vec<usize> = (0..grid.len()).collect();
    assert_eq!(assignment.targets(), identity.as_slice());
}

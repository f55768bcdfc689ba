//! Validates trajectory boundaries, frame timing, rendering, and the pipeline

use image::{Rgb, RgbImage};
use surrafication::MorphError;
use surrafication::animation::pipeline::{MorphConfig, SolverChoice, prepare};
use surrafication::animation::renderer::{CellShape, OpacityCurve, RenderOptions};
use surrafication::animation::timeline::{Easing, Timeline};
use surrafication::animation::trajectory::build_trajectories;
use surrafication::assignment::cost::build_cost_matrix;
use surrafication::assignment::solver::{Algorithm, solve};
use surrafication::spatial::sampler::sample_grid;

fn solid_image(side: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(side, side, Rgb(color))
}

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

fn base_config(resolution: usize, frame_count: usize) -> MorphConfig {
    MorphConfig {
        resolution,
        proximity_importance: 0.3,
        solver: SolverChoice::Greedy,
        frame_count,
        easing: Easing::Linear,
        render: RenderOptions {
            cell_pixel_size: 4,
            ..RenderOptions::default()
        },
    }
}

#[test]
fn test_trajectory_boundaries_reproduce_both_grids() {
    let source = sample_grid(&gradient_image(16), 4).expect("sampling should succeed");
    let target = sample_grid(&solid_image(16, [10, 200, 30]), 4).expect("sampling should succeed");

    let matrix = build_cost_matrix(&source, &target, 0.3).expect("cost matrix should build");
    let assignment = solve(&matrix, Algorithm::Optimal).expect("optimal should succeed");
    let trajectories = build_trajectories(&source, &target, &assignment);

    assert_eq!(trajectories.len(), source.len());

    for (i, trajectory) in trajectories.iter().enumerate() {
        let source_cell = source.cells().get(i).expect("source cell exists");
        assert_eq!(trajectory.position_at(0.0), source_cell.position);
        assert_eq!(trajectory.color_at(0.0), source_cell.color);

        let target_index = assignment.target_of(i).expect("assigned target exists");
        let target_cell = target.cells().get(target_index).expect("target cell exists");
        assert_eq!(trajectory.position_at(1.0), target_cell.position);
        assert_eq!(trajectory.color_at(1.0), target_cell.color);
    }
}

#[test]
fn test_evaluation_clamps_time() {
    let source = sample_grid(&gradient_image(8), 2).expect("sampling should succeed");
    let target = sample_grid(&solid_image(8, [0, 0, 0]), 2).expect("sampling should succeed");
    let matrix = build_cost_matrix(&source, &target, 0.5).expect("cost matrix should build");
    let assignment = solve(&matrix, Algorithm::Approx).expect("approx should succeed");
    let trajectories = build_trajectories(&source, &target, &assignment);

    let trajectory = trajectories.first().expect("at least one trajectory");
    assert_eq!(trajectory.color_at(-0.5), trajectory.color_at(0.0));
    assert_eq!(trajectory.position_at(1.5), trajectory.position_at(1.0));
}

#[test]
fn test_red_to_blue_midpoint_frame() {
    // Three linear frames sample t = 0, 0.5, 1; at weight 0 the solid images
    // tie every cost, so any bijection is acceptable but the per-frame colors
    // are fixed
    let source = solid_image(16, [255, 0, 0]);
    let target = solid_image(16, [0, 0, 255]);
    let mut config = base_config(4, 3);
    config.proximity_importance = 0.0;

    let morph = prepare(&source, &target, &config).expect("pipeline should succeed");

    let first = morph.render_frame(0);
    let middle = morph.render_frame(1);
    let last = morph.render_frame(2);

    for pixel in first.pixels() {
        assert_eq!(pixel.0, [255, 0, 0]);
    }
    // Midpoint of 255 and 0 rounds to 128
    for pixel in middle.pixels() {
        assert_eq!(pixel.0, [128, 0, 128]);
    }
    for pixel in last.pixels() {
        assert_eq!(pixel.0, [0, 0, 255]);
    }
}

#[test]
fn test_default_rendering_reproduces_sampled_grids_at_boundaries() {
    let source = gradient_image(16);
    let target = gradient_image(16);
    let config = base_config(4, 2);

    let morph = prepare(&source, &target, &config).expect("pipeline should succeed");
    let source_grid = sample_grid(&source, 4).expect("sampling should succeed");

    let frame = morph.render_frame(0);
    assert_eq!(frame.width() as usize, config.canvas_size());

    // Every pixel of a cell's slot carries the rounded sampled mean
    for (row, col) in [(0usize, 0usize), (1, 2), (3, 3)] {
        let cell = source_grid.get(row, col).expect("cell exists");
        let expected: Vec<u8> = cell
            .color
            .iter()
            .map(|&c| c.round().clamp(0.0, 255.0) as u8)
            .collect();
        let px = (col * 4 + 1) as u32;
        let py = (row * 4 + 1) as u32;
        assert_eq!(frame.get_pixel(px, py).0.to_vec(), expected);
    }
}

#[test]
fn test_runs_are_byte_identical() {
    let source = gradient_image(32);
    let target = solid_image(32, [40, 90, 200]);

    let mut config = base_config(4, 5);
    config.render.jitter = 0.05;
    config.render.shape = CellShape::Circle;
    config.render.particle_scale = 0.75;
    config.easing = Easing::SmoothStep;

    let first = prepare(&source, &target, &config).expect("pipeline should succeed");
    let second = prepare(&source, &target, &config).expect("pipeline should succeed");

    assert_eq!(first.assignment(), second.assignment());
    assert_eq!(first.trajectories(), second.trajectories());

    for index in 0..first.frame_count() {
        let a = first.render_frame(index);
        let b = second.render_frame(index);
        assert_eq!(a.as_raw(), b.as_raw(), "frame {index} must be identical");
    }
}

#[test]
fn test_invalid_weight_fails_before_any_stage() {
    let source = solid_image(8, [255, 0, 0]);
    let target = solid_image(8, [0, 0, 255]);

    let mut config = base_config(2, 2);
    config.proximity_importance = 1.5;

    let err = prepare(&source, &target, &config).expect_err("validation must fail");
    assert!(matches!(err, MorphError::InvalidParameter { .. }));
}

#[test]
fn test_zero_frame_count_rejected() {
    let config = base_config(2, 0);
    assert!(matches!(
        config.validate(),
        Err(MorphError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Timeline::new(0, Easing::Linear),
        Err(MorphError::InvalidParameter { .. })
    ));
}

#[test]
fn test_invalid_render_options_rejected() {
    let mut config = base_config(2, 2);
    config.render.cell_pixel_size = 0;
    assert!(matches!(
        config.validate(),
        Err(MorphError::InvalidParameter { .. })
    ));

    let mut config = base_config(2, 2);
    config.render.particle_scale = 0.0;
    assert!(matches!(
        config.validate(),
        Err(MorphError::InvalidParameter { .. })
    ));
}

#[test]
fn test_single_frame_shows_completed_morph() {
    let timeline = Timeline::new(1, Easing::Linear).expect("timeline should build");
    assert_eq!(timeline.frame_time(0), 1.0);

    let source = solid_image(8, [255, 0, 0]);
    let target = solid_image(8, [0, 0, 255]);
    let morph = prepare(&source, &target, &base_config(2, 1)).expect("pipeline should succeed");

    for pixel in morph.render_frame(0).pixels() {
        assert_eq!(pixel.0, [0, 0, 255]);
    }
}

#[test]
fn test_timeline_easing_fixes_boundaries() {
    let timeline = Timeline::new(5, Easing::SmoothStep).expect("timeline should build");
    assert_eq!(timeline.frame_time(0), 0.0);
    assert_eq!(timeline.frame_time(4), 1.0);
    // Smoothstep is symmetric, so the middle frame stays at 0.5
    assert!((timeline.frame_time(2) - 0.5).abs() < 1e-12);

    let times: Vec<f64> = timeline.frame_times().collect();
    assert_eq!(times.len(), 5);
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_cosmetic_shapes_leave_background_between_particles() {
    let source = solid_image(16, [255, 255, 255]);
    let target = solid_image(16, [255, 255, 255]);

    let mut config = base_config(2, 2);
    config.render.cell_pixel_size = 8;
    config.render.shape = CellShape::Circle;
    config.render.particle_scale = 0.5;
    config.render.opacity = OpacityCurve::Breathing;

    let morph = prepare(&source, &target, &config).expect("pipeline should succeed");
    let frame = morph.render_frame(0);

    // Slot corners fall outside the shrunken discs
    assert_eq!(frame.get_pixel(0, 0).0, [0, 0, 0]);
    // Slot centers are covered
    assert_eq!(frame.get_pixel(4, 4).0, [255, 255, 255]);
}

//! Image partitioning and mean-color sampling
//!
//! Divides an image into resolution × resolution rectangular regions and
//! reduces each to a cell descriptor. Sampling is deterministic: a fixed image
//! and resolution always produce the same grid.

use crate::io::error::{MorphError, Result};
use crate::spatial::cell::{Cell, CellGrid};
use image::RgbImage;

/// Sample an image into an R×R grid of mean-color cells
///
/// Regions are near-equal: each spans `side / resolution` pixels and the last
/// row and column absorb the remainder of non-divisible dimensions. Cell
/// positions are the normalized centers of their grid slots, matching the
/// slot centers the renderer draws at.
///
/// # Errors
///
/// Returns `InvalidResolution` if `resolution` is zero or exceeds either image
/// dimension, and `InvalidImage` if the image has zero width or height.
pub fn sample_grid(image: &RgbImage, resolution: usize) -> Result<CellGrid> {
    let (width, height) = (image.width() as usize, image.height() as usize);

    if width == 0 || height == 0 {
        return Err(MorphError::InvalidImage {
            reason: format!("image has degenerate dimensions {width}x{height}"),
        });
    }

    if resolution == 0 {
        return Err(MorphError::InvalidResolution {
            value: resolution,
            reason: "grid resolution must be positive".to_string(),
        });
    }

    if resolution > width || resolution > height {
        return Err(MorphError::InvalidResolution {
            value: resolution,
            reason: format!("grid resolution exceeds image dimensions {width}x{height}"),
        });
    }

    let cell_height = height / resolution;
    let cell_width = width / resolution;

    let mut cells = Vec::with_capacity(resolution * resolution);

    for row in 0..resolution {
        let y_start = row * cell_height;
        let y_end = if row + 1 == resolution {
            height
        } else {
            y_start + cell_height
        };

        for col in 0..resolution {
            let x_start = col * cell_width;
            let x_end = if col + 1 == resolution {
                width
            } else {
                x_start + cell_width
            };

            cells.push(Cell {
                row,
                col,
                color: region_mean_color(image, x_start, x_end, y_start, y_end),
                position: slot_center(row, col, resolution),
            });
        }
    }

    Ok(CellGrid::from_cells(resolution, cells))
}

/// Normalized (y, x) center of a grid slot
pub fn slot_center(row: usize, col: usize, resolution: usize) -> [f64; 2] {
    let denom = resolution as f64;
    [
        (row as f64 + 0.5) / denom,
        (col as f64 + 0.5) / denom,
    ]
}

// Accumulates in u64 before dividing; a region never exceeds 2^32 pixels
fn region_mean_color(
    image: &RgbImage,
    x_start: usize,
    x_end: usize,
    y_start: usize,
    y_end: usize,
) -> [f64; 3] {
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for y in y_start..y_end {
        for x in x_start..x_end {
            let pixel = image.get_pixel(x as u32, y as u32);
            for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                *sum += u64::from(channel);
            }
            count += 1;
        }
    }

    if count == 0 {
        return [0.0; 3];
    }

    sums.map(|sum| sum as f64 / count as f64)
}

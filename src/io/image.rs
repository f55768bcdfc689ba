//! Image loading and per-frame PNG export
//!
//! Inputs are center-cropped to a square and Lanczos-resized to the working
//! size before sampling, so every grid cell covers the same pixel span in
//! both images.

use crate::io::error::{MorphError, Result, invalid_parameter};
use image::RgbImage;
use image::imageops::FilterType;
use std::path::Path;

/// Load an image, center-crop it square, and resize it to `size` × `size`
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded,
/// `InvalidImage` if it has zero width or height, and `InvalidParameter` for
/// a zero working size.
pub fn load_image<P: AsRef<Path>>(path: P, size: u32) -> Result<RgbImage> {
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"working size must be positive",
        ));
    }

    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MorphError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidImage {
            reason: format!(
                "'{}' has degenerate dimensions {width}x{height}",
                path_buf.display()
            ),
        });
    }

    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;

    let cropped = img.crop_imm(left, top, side, side);
    Ok(cropped.resize_exact(size, size, FilterType::Lanczos3).to_rgb8())
}

/// Save one rendered frame as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if the frame cannot be saved.
pub fn export_frame_png(frame: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MorphError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    frame.save(path).map_err(|e| MorphError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

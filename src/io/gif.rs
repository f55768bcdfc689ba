//! Animated GIF assembly from rendered frames
//!
//! Frames are encoded in index order at the requested frame rate. Hold
//! durations are applied as longer delays on the first and last frames
//! rather than duplicated images, so the file stays small and the core still
//! emits exactly one image per time sample.

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{MorphError, Result, invalid_parameter};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use std::path::Path;

/// Encode rendered frames into a looping animated GIF
///
/// `hold_start` and `hold_end` are extra seconds added to the first and last
/// frame delays. The per-frame delay is clamped to the minimum that GIF
/// viewers reliably honor.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero frame rate or an empty frame
/// sequence, `FileSystem` if the output location cannot be created, and
/// `ImageExport` if encoding fails.
pub fn export_gif<I>(
    frames: I,
    fps: u32,
    hold_start: f64,
    hold_end: f64,
    output_path: &Path,
) -> Result<()>
where
    I: IntoIterator<Item = RgbImage>,
{
    if fps == 0 {
        return Err(invalid_parameter(
            "fps",
            &fps,
            &"frame rate must be positive",
        ));
    }

    let buffers: Vec<RgbImage> = frames.into_iter().collect();
    if buffers.is_empty() {
        return Err(invalid_parameter(
            "frames",
            &0,
            &"animation needs at least one frame",
        ));
    }

    let base_delay_ms = (1000 / fps).max(VIEWER_MIN_FRAME_DELAY_MS);
    let hold_start_ms = (hold_start.max(0.0) * 1000.0).round() as u32;
    let hold_end_ms = (hold_end.max(0.0) * 1000.0).round() as u32;
    let last_index = buffers.len() - 1;

    let encoded: Vec<Frame> = buffers
        .into_iter()
        .enumerate()
        .map(|(index, buffer)| {
            let mut delay_ms = base_delay_ms;
            if index == 0 {
                delay_ms += hold_start_ms;
            }
            if index == last_index {
                delay_ms += hold_end_ms;
            }
            Frame::from_parts(
                DynamicImage::ImageRgb8(buffer).into_rgba8(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            )
        })
        .collect();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MorphError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| MorphError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = GifEncoder::new(file);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| MorphError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    encoder
        .encode_frames(encoded)
        .map_err(|e| MorphError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

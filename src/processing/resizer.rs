//! Single-image resize: decode, fit, resample, encode.
//!
//! Runs synchronously; the batch driver calls it on a blocking thread so
//! the async runtime is never stalled by pixel work.

use image::GenericImageView;
use image::imageops::FilterType;
use tracing::debug;

use crate::core::{FileResult, ResizeTask};
use crate::utils::{ResizerError, ResizerResult};

use super::formats::save_image;

/// Resizes one file to fit within `task.bounds` and writes it to the
/// task's output path.
///
/// The input is never modified; exactly one file is created or
/// overwritten at the output path. Images that already fit the bounds are
/// re-encoded without resampling, so repeated runs over the same output
/// never shrink it further.
pub fn resize_file(task: &ResizeTask) -> ResizerResult<FileResult> {
    let input_path = &task.input_path;

    let original_size = std::fs::metadata(input_path)
        .map(|m| m.len())
        .map_err(|e| {
            ResizerError::Io(format!("Cannot read input file {}: {e}", input_path.display()))
        })?;

    let image = image::open(input_path).map_err(|e| ResizerError::decode(input_path, e))?;
    let (orig_w, orig_h) = image.dimensions();

    let (max_w, max_h) = task.bounds;
    let (target_w, target_h) = fit_within(orig_w, orig_h, max_w, max_h);

    let image = if (target_w, target_h) == (orig_w, orig_h) {
        image
    } else {
        debug!(
            "Resizing {}: {}x{} -> {}x{}",
            input_path.display(),
            orig_w,
            orig_h,
            target_w,
            target_h
        );
        image.resize_exact(target_w, target_h, FilterType::Lanczos3)
    };

    save_image(&image, &task.output_path)?;

    let resized_size = std::fs::metadata(&task.output_path)
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(FileResult {
        input_path: input_path.display().to_string(),
        output_path: task.output_path.display().to_string(),
        original_size,
        resized_size,
        saved_bytes: original_size as i64 - resized_size as i64,
        original_dimensions: (orig_w, orig_h),
        output_dimensions: (target_w, target_h),
        input_deleted: false,
        delete_error: None,
    })
}

/// Computes the largest dimensions that fit within the bounding box while
/// preserving the aspect ratio.
///
/// Both dimensions are scaled by the same factor, capped at 1.0 so the
/// image is never enlarged. Results are rounded and clamped to at least
/// one pixel.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    if scale >= 1.0 {
        return (width, height);
    }

    let target_w = ((width as f64 * scale).round() as u32).max(1);
    let target_h = ((height as f64 * scale).round() as u32).max(1);
    (target_w, target_h)
}

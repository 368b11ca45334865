//! Folder batch driver.
//!
//! Validates a [`ResizeRequest`], enumerates eligible images, and resizes
//! them strictly one at a time. Each file's pixel work runs inside
//! `tokio::task::spawn_blocking`; the await between files is the yield
//! point an async presentation layer needs to stay responsive. The first
//! decode or write failure aborts the remainder of the run; files already
//! written stay written.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::core::{
    BatchProgress, BatchSummary, FileResult, OutputMode, ProgressType, ResizeRequest, ResizeTask,
};
use crate::utils::{ResizerError, ResizerResult, is_supported_image};

use super::resizer::resize_file;

/// Drives batch resize runs.
///
/// `run` takes `&mut self`, so one driver value cannot start a second run
/// while a run is in flight; the presentation layer is still expected to
/// disable its start control during processing.
#[derive(Debug, Default)]
pub struct BatchResizer;

impl BatchResizer {
    pub fn new() -> Self {
        Self
    }

    /// Runs a full batch: validate, prepare the destination, enumerate,
    /// resize each file in directory order, and summarize.
    ///
    /// `on_progress` is invoked once before the first file, once after
    /// every processed file, and once on completion.
    pub async fn run(
        &mut self,
        request: &ResizeRequest,
        mut on_progress: impl FnMut(BatchProgress) + Send,
    ) -> ResizerResult<BatchSummary> {
        // Request-level failures fire before any file or directory is touched.
        let bounds = request.bounds.resolve()?;

        if !request.input_folder.is_dir() {
            return Err(ResizerError::InputFolderMissing(request.input_folder.clone()));
        }

        if request.output_mode != OutputMode::OverwriteInPlace {
            fs::create_dir_all(&request.output_folder)
                .await
                .map_err(|e| ResizerError::output_dir_create(&request.output_folder, e))?;
        }

        let files = list_image_files(&request.input_folder).await?;
        let total = files.len();
        info!(
            "Resizing {} images from {} to fit {}x{}",
            total,
            request.input_folder.display(),
            bounds.0,
            bounds.1
        );

        on_progress(BatchProgress::new(
            ProgressType::Start,
            0,
            total,
            format!("Processing 0 of {total} images..."),
        ));

        let mut results = Vec::with_capacity(total);
        for (idx, input_path) in files.into_iter().enumerate() {
            let task = ResizeTask::resolve(&input_path, request, bounds);
            let output_path = task.output_path.clone();

            let outcome = tokio::task::spawn_blocking(move || resize_file(&task))
                .await
                .map_err(|e| ResizerError::Io(format!("Resize task panicked: {e}")))?;

            // First decode/write failure aborts the remainder of the run;
            // an Error snapshot keeps the presentation layer in sync.
            let mut result = match outcome {
                Ok(result) => result,
                Err(e) => {
                    on_progress(BatchProgress::new(ProgressType::Error, idx, total, e.to_string()));
                    return Err(e);
                }
            };

            // Skip the delete when the output landed on the input path
            // (same folder, no suffix): removing it would destroy the file
            // just written.
            if request.output_mode == OutputMode::WriteToOutputDirThenDeleteInput
                && input_path != output_path
            {
                match fs::remove_file(&input_path).await {
                    Ok(()) => result.input_deleted = true,
                    Err(e) => {
                        let err = ResizerError::delete(&input_path, e);
                        warn!("{err}");
                        result.delete_error = Some(err.to_string());
                    }
                }
            }

            let completed = idx + 1;
            debug!(
                "{}: {} -> {} bytes",
                result.input_path, result.original_size, result.resized_size
            );
            let metadata = serde_json::json!({
                "fileName": input_path.file_name().unwrap_or_default().to_string_lossy(),
                "originalSize": result.original_size,
                "resizedSize": result.resized_size,
                "savedBytes": result.saved_bytes,
            });
            on_progress(
                BatchProgress::new(
                    ProgressType::Progress,
                    completed,
                    total,
                    format!("Processing {completed} of {total} images..."),
                )
                .with_metadata(metadata),
            );
            results.push(result);
        }

        info!("Batch complete: {} files processed", total);
        on_progress(BatchProgress::new(
            ProgressType::Complete,
            total,
            total,
            "Images resized successfully",
        ));

        Ok(BatchSummary::from_results(results))
    }

    /// Resizes a single file with no folder enumeration.
    ///
    /// Convenience wrapper over the same blocking resize path the batch
    /// uses; the output directory must already exist.
    pub async fn resize_one(
        &self,
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        bounds: (u32, u32),
    ) -> ResizerResult<FileResult> {
        let task = ResizeTask {
            input_path: input_path.into(),
            output_path: output_path.into(),
            bounds,
        };
        tokio::task::spawn_blocking(move || resize_file(&task))
            .await
            .map_err(|e| ResizerError::Io(format!("Resize task panicked: {e}")))?
    }
}

/// Lists direct children of `folder` whose extension is on the supported
/// allow-list, in natural directory order. Sub-directories are not
/// traversed.
async fn list_image_files(folder: &Path) -> ResizerResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(folder).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

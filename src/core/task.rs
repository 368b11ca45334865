//! Resolved unit of work handed to the single-image resizer.

use std::path::{Path, PathBuf};
use crate::core::types::{OutputMode, ResizeRequest};
use crate::utils::apply_suffix;

/// One file's resize job: where to read, where to write, and the bounding
/// box both dimensions must fit within.
#[derive(Debug, Clone)]
pub struct ResizeTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path the resized image will be written to
    pub output_path: PathBuf,
    /// (max_width, max_height) bounding box
    pub bounds: (u32, u32),
}

impl ResizeTask {
    /// Resolves the output path for `input_path` from the request's output
    /// mode, then applies the rename suffix when one is configured.
    ///
    /// Overwrite-in-place keeps the input path itself; the other modes use
    /// the output folder plus the original filename. The suffix is applied
    /// after mode resolution, so an in-place run with a suffix writes a
    /// sibling file instead of replacing the original, as the form did.
    pub fn resolve(input_path: &Path, request: &ResizeRequest, bounds: (u32, u32)) -> Self {
        let base = match request.output_mode {
            OutputMode::OverwriteInPlace => input_path.to_path_buf(),
            OutputMode::WriteToOutputDir | OutputMode::WriteToOutputDirThenDeleteInput => {
                request.output_folder.join(input_path.file_name().unwrap_or_default())
            }
        };

        let output_path = match request.rename_suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => apply_suffix(&base, suffix),
            _ => base,
        };

        Self {
            input_path: input_path.to_path_buf(),
            output_path,
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SizeSpec;

    fn request(mode: OutputMode, suffix: Option<&str>) -> ResizeRequest {
        ResizeRequest {
            input_folder: PathBuf::from("/photos"),
            output_folder: PathBuf::from("/resized"),
            bounds: SizeSpec::Auto,
            output_mode: mode,
            rename_suffix: suffix.map(str::to_string),
        }
    }

    #[test]
    fn overwrite_in_place_keeps_input_path() {
        let task = ResizeTask::resolve(
            Path::new("/photos/a.jpg"),
            &request(OutputMode::OverwriteInPlace, None),
            (1200, 1200),
        );
        assert_eq!(task.output_path, PathBuf::from("/photos/a.jpg"));
    }

    #[test]
    fn output_dir_mode_joins_original_filename() {
        let task = ResizeTask::resolve(
            Path::new("/photos/a.jpg"),
            &request(OutputMode::WriteToOutputDir, None),
            (1200, 1200),
        );
        assert_eq!(task.output_path, PathBuf::from("/resized/a.jpg"));
    }

    #[test]
    fn suffix_is_inserted_before_extension() {
        let task = ResizeTask::resolve(
            Path::new("/photos/a.png"),
            &request(OutputMode::WriteToOutputDir, Some("_opt")),
            (1200, 1200),
        );
        assert_eq!(task.output_path, PathBuf::from("/resized/a_opt.png"));
    }

    #[test]
    fn suffix_applies_in_overwrite_mode_too() {
        let task = ResizeTask::resolve(
            Path::new("/photos/a.png"),
            &request(OutputMode::OverwriteInPlace, Some("_sm")),
            (1200, 1200),
        );
        assert_eq!(task.output_path, PathBuf::from("/photos/a_sm.png"));
    }

    #[test]
    fn empty_suffix_is_ignored() {
        let task = ResizeTask::resolve(
            Path::new("/photos/a.png"),
            &request(OutputMode::WriteToOutputDir, Some("")),
            (1200, 1200),
        );
        assert_eq!(task.output_path, PathBuf::from("/resized/a.png"));
    }
}

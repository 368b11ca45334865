//! Core types for resize requests and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::utils::{ResizerError, ResizerResult};

/// Bounding box used when the caller picks auto sizing (web-friendly default).
pub const AUTO_BOUNDS: (u32, u32) = (1200, 1200);

/// Ratio used to infer the missing dimension when only one is given.
const INFERRED_RATIO: f64 = 1.5;

/// A batch resize request as the presentation layer hands it over.
///
/// Mirrors the form: two folder paths, the sizing choice, the output
/// policy, and an optional rename suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    /// Folder whose direct children are resized
    pub input_folder: PathBuf,
    /// Destination folder; ignored when overwriting in place
    pub output_folder: PathBuf,
    /// Bounding box selection (auto or manual text fields)
    pub bounds: SizeSpec,
    /// Where outputs go and whether originals survive
    pub output_mode: OutputMode,
    /// Text inserted before the extension of every output filename
    #[serde(default)]
    pub rename_suffix: Option<String>,
}

/// Bounding box selection, carried exactly as the form provides it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeSpec {
    /// Fixed 1200×1200 bounding box
    Auto,
    /// Raw width/height text fields; either may be blank
    Manual { width: String, height: String },
}

impl SizeSpec {
    /// Resolves the selection to a concrete (max_width, max_height) pair.
    ///
    /// A single given dimension infers the other at 1.5× its value. Both
    /// blank is [`ResizerError::MissingDimensions`]; any non-integer or
    /// non-positive text is [`ResizerError::InvalidDimensions`].
    pub fn resolve(&self) -> ResizerResult<(u32, u32)> {
        match self {
            Self::Auto => Ok(AUTO_BOUNDS),
            Self::Manual { width, height } => {
                let width = parse_dimension(width)?;
                let height = parse_dimension(height)?;
                match (width, height) {
                    (Some(w), Some(h)) => Ok((w, h)),
                    (Some(w), None) => Ok((w, (w as f64 * INFERRED_RATIO).round() as u32)),
                    (None, Some(h)) => Ok(((h as f64 * INFERRED_RATIO).round() as u32, h)),
                    (None, None) => Err(ResizerError::MissingDimensions),
                }
            }
        }
    }
}

/// Parses one dimension field. Blank (or whitespace) counts as absent.
fn parse_dimension(text: &str) -> ResizerResult<Option<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(ResizerError::InvalidDimensions(text.to_string())),
        Ok(value) => Ok(Some(value)),
    }
}

/// Output policy for resized files. The three modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputMode {
    /// Write each resized image over its original
    OverwriteInPlace,
    /// Write resized images into the output folder
    WriteToOutputDir,
    /// Write into the output folder, then delete the original
    WriteToOutputDirThenDeleteInput,
}

/// Result of resizing one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    /// Path to the original input file
    pub input_path: String,
    /// Path the resized image was written to
    pub output_path: String,
    /// Original file size in bytes
    pub original_size: u64,
    /// Resized file size in bytes
    pub resized_size: u64,
    /// Bytes saved (can be negative if the file grew)
    pub saved_bytes: i64,
    /// Pixel dimensions of the original image
    pub original_dimensions: (u32, u32),
    /// Pixel dimensions of the written image
    pub output_dimensions: (u32, u32),
    /// Whether the original was removed after a successful write
    pub input_deleted: bool,
    /// Deletion failure, when one occurred (non-fatal)
    pub delete_error: Option<String>,
}

/// Terminal summary of a completed batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Number of files processed
    pub total_files: usize,
    /// Total input bytes across all files
    pub total_input_bytes: u64,
    /// Total output bytes across all files
    pub total_output_bytes: u64,
    /// Per-file results in processing order
    pub results: Vec<FileResult>,
}

impl BatchSummary {
    pub fn from_results(results: Vec<FileResult>) -> Self {
        Self {
            total_files: results.len(),
            total_input_bytes: results.iter().map(|r| r.original_size).sum(),
            total_output_bytes: results.iter().map(|r| r.resized_size).sum(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual(width: &str, height: &str) -> SizeSpec {
        SizeSpec::Manual { width: width.to_string(), height: height.to_string() }
    }

    #[test]
    fn auto_resolves_to_fixed_bounds() {
        assert_eq!(SizeSpec::Auto.resolve().unwrap(), (1200, 1200));
    }

    #[test]
    fn both_dimensions_pass_through() {
        assert_eq!(manual("640", "480").resolve().unwrap(), (640, 480));
    }

    #[test]
    fn width_only_infers_height() {
        assert_eq!(manual("800", "").resolve().unwrap(), (800, 1200));
    }

    #[test]
    fn height_only_infers_width() {
        assert_eq!(manual("", "600").resolve().unwrap(), (900, 600));
    }

    #[test]
    fn odd_value_rounds_inferred_dimension() {
        // 333 * 1.5 = 499.5, rounds to 500
        assert_eq!(manual("333", "").resolve().unwrap(), (333, 500));
    }

    #[test]
    fn both_blank_is_missing_dimensions() {
        assert!(matches!(
            manual("", "  ").resolve(),
            Err(ResizerError::MissingDimensions)
        ));
    }

    #[test]
    fn non_integer_text_is_invalid() {
        assert!(matches!(
            manual("abc", "600").resolve(),
            Err(ResizerError::InvalidDimensions(_))
        ));
        assert!(matches!(
            manual("800", "12.5").resolve(),
            Err(ResizerError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn zero_and_negative_are_invalid() {
        assert!(matches!(
            manual("0", "600").resolve(),
            Err(ResizerError::InvalidDimensions(_))
        ));
        assert!(matches!(
            manual("-800", "").resolve(),
            Err(ResizerError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = ResizeRequest {
            input_folder: PathBuf::from("/in"),
            output_folder: PathBuf::from("/out"),
            bounds: SizeSpec::Auto,
            output_mode: OutputMode::WriteToOutputDir,
            rename_suffix: Some("_sm".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["outputMode"], "writeToOutputDir");
        assert_eq!(json["renameSuffix"], "_sm");
        assert_eq!(json["inputFolder"], "/in");
    }

    #[test]
    fn summary_totals_match_results() {
        let result = FileResult {
            input_path: "a.png".into(),
            output_path: "b.png".into(),
            original_size: 100,
            resized_size: 60,
            saved_bytes: 40,
            original_dimensions: (10, 10),
            output_dimensions: (5, 5),
            input_deleted: false,
            delete_error: None,
        };
        let summary = BatchSummary::from_results(vec![result.clone(), result]);
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_input_bytes, 200);
        assert_eq!(summary.total_output_bytes, 120);
    }
}

//! Error types for the batch resizer.
//!
//! Provides a single error taxonomy using `thiserror`. Errors are
//! `Serialize` so a presentation frontend can receive them unchanged.

use std::io;
use std::path::PathBuf;
use serde::Serialize;
use thiserror::Error;

/// Main error type for the resizer library.
///
/// The first three variants are request-level failures raised before any
/// file is touched; the rest occur during per-file processing.
#[derive(Error, Debug, Serialize)]
pub enum ResizerError {
    /// The input folder does not exist or is not a directory
    #[error("Input folder does not exist: {0}")]
    InputFolderMissing(PathBuf),

    /// A dimension field held non-integer (or non-positive) text
    #[error("Width and height must be positive integers, got '{0}'")]
    InvalidDimensions(String),

    /// Neither width nor height was given and auto sizing was not selected
    #[error("At least one of width or height must be given")]
    MissingDimensions,

    /// The output folder could not be created
    #[error("Failed to create output folder {path}: {message}")]
    OutputDirCreate { path: PathBuf, message: String },

    /// The input file could not be decoded as a raster image
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The resized image could not be encoded or written
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// The original file could not be removed after a successful write.
    /// Non-fatal: the driver records it on the file result and continues.
    #[error("Failed to delete {path}: {message}")]
    Delete { path: PathBuf, message: String },

    /// Output extension outside the supported format allow-list
    #[error("Unsupported image format: {0}")]
    Format(String),

    /// Other file IO error (directory listing, metadata)
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for resizer operations.
pub type ResizerResult<T> = Result<T, ResizerError>;

// Helper methods for error creation
impl ResizerError {
    pub fn output_dir_create(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::OutputDirCreate { path: path.into(), message: err.to_string() }
    }

    pub fn decode(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::Decode { path: path.into(), message: err.to_string() }
    }

    pub fn write(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::Write { path: path.into(), message: err.to_string() }
    }

    pub fn delete(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::Delete { path: path.into(), message: err.to_string() }
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }
}

// Convert std::io::Error to ResizerError
impl From<io::Error> for ResizerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

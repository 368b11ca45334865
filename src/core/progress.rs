use serde::{Deserialize, Serialize};

/// Progress message type
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
    Error,
}

/// Progress snapshot emitted to the presentation layer after each file.
///
/// Written by exactly one writer (the batch driver) and handed to the
/// caller's callback; never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgress {
    /// Progress type (start, progress, complete)
    pub progress_type: ProgressType,
    /// Number of completed files
    pub completed: usize,
    /// Total number of files in the run
    pub total: usize,
    /// Progress percentage (0-100)
    pub percentage: usize,
    /// Human-readable status label ("Processing 2 of 5 images...")
    pub status: String,
    /// Optional per-file metadata (filename, byte sizes)
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl BatchProgress {
    /// Create a new progress snapshot with the percentage derived from the counts.
    pub fn new(progress_type: ProgressType, completed: usize, total: usize, status: impl Into<String>) -> Self {
        let percentage = if total > 0 { (completed * 100) / total } else { 0 };
        Self {
            progress_type,
            completed,
            total,
            percentage,
            status: status.into(),
            metadata: None,
        }
    }

    /// Attach per-file metadata to this snapshot.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

//! Batch image resizing core.
//!
//! Fits every image in a folder within a bounding box, preserving aspect
//! ratio and never upscaling. The presentation layer (a desktop form, a
//! CLI, anything) builds a [`ResizeRequest`], calls
//! [`BatchResizer::run`] with a progress callback, and receives a
//! [`BatchSummary`] or a typed [`ResizerError`].

// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers. The crate:: prefix on the first
// path keeps the module from colliding with the built-in `core` crate.
pub use crate::core::{
    AUTO_BOUNDS, BatchProgress, BatchSummary, FileResult, OutputMode, ProgressType,
    ResizeRequest, ResizeTask, SizeSpec,
};
pub use crate::processing::{BatchResizer, fit_within, resize_file};
pub use crate::utils::{ImageFormat, ResizerError, ResizerResult};

use tracing::debug;

/// Installs a compact, env-filtered tracing subscriber.
///
/// Opt-in for binaries and examples; the library itself never installs
/// one. Safe to call more than once: later calls are no-ops.
pub fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .compact()                // Use compact formatter instead of pretty
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        debug!("logging initialized");
    }
}

//! Image processing: the single-image resizer and the folder batch driver.
//!
//! # Architecture
//!
//! - [`BatchResizer`]: validates requests, enumerates the input folder,
//!   and drives files through the resizer one at a time with progress
//!   callbacks.
//! - [`resizer`]: decode, aspect-preserving fit, Lanczos3 resample.
//! - [`formats`]: maps output extensions to format-specific encoders.

mod batch;
mod formats;
mod resizer;

pub use batch::BatchResizer;
pub use resizer::{fit_within, resize_file};

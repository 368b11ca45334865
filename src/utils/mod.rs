pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ResizerError, ResizerResult};
pub use formats::{ImageFormat, format_from_path};
pub use fs::{apply_suffix, is_supported_image};

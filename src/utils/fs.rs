use std::path::{Path, PathBuf};
use crate::utils::formats::format_from_path;

/// Check whether a path carries an extension from the supported allow-list
pub fn is_supported_image(path: &Path) -> bool {
    format_from_path(path).is_some()
}

/// Insert a rename suffix immediately before the file extension.
///
/// "photo.jpg" + "_sm" becomes "photo_sm.jpg". A file without an extension
/// gets the suffix appended.
pub fn apply_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let renamed = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(renamed)
}

//! Shared filesystem helpers

use std::path::Path;

/// Media file extensions we recognize
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "wmv", "avi", "mkv", "m4v", "webm", "mpg", "mpeg",
];

/// Check whether a path looks like a media file based on its extension.
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Sanitize a string for use as a file or directory name.
pub fn sanitize_for_filename(name: &str) -> String {
    sanitize_filename::sanitize(name)
}

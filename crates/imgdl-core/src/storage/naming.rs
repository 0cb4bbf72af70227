//! StoredImage file naming.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub const FILE_PREFIX: &str = "downloaded_image_";
pub const PNG_EXTENSION: &str = "png";

/// `downloaded_image_<millis>.png`
pub fn file_name(millis: u64) -> String {
    format!("{}{}.{}", FILE_PREFIX, millis, PNG_EXTENSION)
}

/// Inverse of `file_name`; None for anything that does not match the pattern.
pub fn parse_millis(name: &str) -> Option<u64> {
    let rest = name.strip_prefix(FILE_PREFIX)?;
    let digits = rest.strip_suffix(".png")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// True when the path's extension is `png`, ignoring case.
pub fn is_png_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PNG_EXTENSION))
}

/// Milliseconds since the Unix epoch (0 if the clock is before it).
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

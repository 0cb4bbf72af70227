//! Stored image files in the shared Documents directory.
//!
//! Files are named `downloaded_image_<epoch-millis>.png`. The writer encodes
//! the whole PNG in memory, writes it to a hidden `.part` file, then renames
//! it onto a name it has claimed with exclusive create, so readers never see
//! partial data and same-millisecond completions never overwrite each other.

mod naming;
mod writer;

pub use naming::{file_name, is_png_path, now_millis, parse_millis, FILE_PREFIX, PNG_EXTENSION};
pub use writer::{encode_png, persist_png, persist_png_at};

use crate::config::ImgdlConfig;
use std::path::PathBuf;

/// Resolves the shared Documents directory: config override, then the
/// platform user directory, then `$HOME/Documents`.
pub fn documents_dir(cfg: &ImgdlConfig) -> Option<PathBuf> {
    if let Some(dir) = &cfg.documents_dir {
        return Some(dir.clone());
    }
    dirs::document_dir().or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
}

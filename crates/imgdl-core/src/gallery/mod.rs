//! Gallery loader: decode every `.png` file in the Documents directory.
//!
//! Errors never surface: a missing or unreadable directory yields an empty
//! gallery and a file that fails to decode is left out. Entries keep the
//! order of the directory listing; no sort is applied.

use crate::storage::is_png_path;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// One decoded image and the file it came from.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl GalleryEntry {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// The list a presentation layer renders. Only replaced via `reload`.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    entries: Vec<GalleryEntry>,
}

impl GalleryState {
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<GalleryEntry> {
        self.entries
    }
}

/// Scans `dir` and decodes every file with a case-insensitive `png` extension.
/// Blocking; returns after every candidate has been attempted.
pub fn load_gallery(dir: &Path) -> Vec<GalleryEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), "gallery directory not readable: {}", e);
            return Vec::new();
        }
    };

    let entries: Vec<GalleryEntry> = read_dir
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_png_path(p))
        .filter_map(|path| decode_file(&path).map(|image| GalleryEntry { path, image }))
        .collect();

    tracing::debug!(dir = %dir.display(), count = entries.len(), "gallery loaded");
    entries
}

/// Discards `previous` and builds a fresh state from `dir`.
pub fn reload(previous: GalleryState, dir: &Path) -> GalleryState {
    drop(previous);
    GalleryState {
        entries: load_gallery(dir),
    }
}

/// Runs `load_gallery` on the blocking pool so the caller's thread stays responsive.
pub async fn load_gallery_async(dir: PathBuf) -> GalleryState {
    match tokio::task::spawn_blocking(move || reload(GalleryState::default(), &dir)).await {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("gallery load task did not complete: {}", e);
            GalleryState::default()
        }
    }
}

fn decode_file(path: &Path) -> Option<DynamicImage> {
    let bytes = fs::read(path)
        .map_err(|e| tracing::debug!(path = %path.display(), "skipping unreadable file: {}", e))
        .ok()?;
    image::load_from_memory(&bytes)
        .map_err(|e| tracing::debug!(path = %path.display(), "skipping undecodable file: {}", e))
        .ok()
}

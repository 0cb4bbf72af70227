//! `imgdl gallery` – load the gallery and list its entries.

use anyhow::Result;
use imgdl_core::config::ImgdlConfig;
use imgdl_core::gallery::{self, GalleryState};
use imgdl_core::storage;
use std::path::PathBuf;

pub async fn run_gallery(cfg: &ImgdlConfig) -> Result<bool> {
    let state = load_state(storage::documents_dir(cfg)).await;
    for entry in state.entries() {
        let (w, h) = entry.dimensions();
        println!("{}  {}x{}", entry.path.display(), w, h);
    }
    println!("{} image(s)", state.len());
    Ok(true)
}

/// No resolvable Documents directory means an empty gallery, not an error.
async fn load_state(dir: Option<PathBuf>) -> GalleryState {
    match dir {
        Some(d) => gallery::load_gallery_async(d).await,
        None => {
            tracing::debug!("no Documents directory; gallery is empty");
            GalleryState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unresolved_directory_is_empty_gallery() {
        assert!(load_state(None).await.is_empty());
    }

    #[tokio::test]
    async fn missing_directory_is_empty_gallery() {
        let dir = std::env::temp_dir().join("imgdl-cli-does-not-exist-7f3a");
        assert!(load_state(Some(dir)).await.is_empty());
    }

    #[tokio::test]
    async fn run_gallery_succeeds_for_missing_directory() {
        let cfg = ImgdlConfig {
            documents_dir: Some(std::env::temp_dir().join("imgdl-cli-does-not-exist-7f3a")),
            ..ImgdlConfig::default()
        };
        assert!(run_gallery(&cfg).await.unwrap());
    }
}

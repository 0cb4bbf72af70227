//! The fetch-and-persist task: download one image and store it as PNG.
//!
//! `run_fetch_and_persist` is the blocking body and never panics or returns
//! `Err`; every fault becomes `TaskOutcome::Failed` with its `ErrorKind`.
//! `submit_download` moves it onto the tokio blocking pool. The returned
//! handle may be awaited for the outcome or simply dropped, in which case the
//! task keeps running detached and its result is only visible as a new file.

mod handle;

pub use handle::DownloadHandle;

use crate::config::ImgdlConfig;
use crate::error::{ErrorKind, FetchError};
use crate::fetch::{self, FetchOptions};
use crate::storage;
use image::DynamicImage;
use std::path::PathBuf;

/// Input of one task run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: Option<String>,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// A PNG file written by a successful task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Terminal result of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Succeeded(StoredImage),
    Failed(ErrorKind),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Succeeded(_))
    }
}

/// Everything a task needs besides its request. Cheap to clone into each task.
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// Target directory; None when no Documents directory could be resolved.
    pub documents_dir: Option<PathBuf>,
    pub fetch: FetchOptions,
}

impl TaskContext {
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: Some(documents_dir.into()),
            fetch: FetchOptions::default(),
        }
    }

    pub fn from_config(cfg: &ImgdlConfig) -> Self {
        Self {
            documents_dir: storage::documents_dir(cfg),
            fetch: FetchOptions::from(cfg),
        }
    }
}

/// Runs one task to completion on the current thread (blocking).
pub fn run_fetch_and_persist(ctx: &TaskContext, request: &DownloadRequest) -> TaskOutcome {
    let url = match request.url.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => {
            tracing::warn!("download rejected: {}", FetchError::EmptyUrl);
            return TaskOutcome::Failed(ErrorKind::InvalidInput);
        }
    };

    let image = match fetch::fetch_image(url, ctx.fetch) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!(url, kind = %e.kind(), "download failed: {}", e);
            return TaskOutcome::Failed(e.kind());
        }
    };

    match persist(ctx, &image) {
        Ok(path) => {
            tracing::info!(url, path = %path.display(), "image stored");
            TaskOutcome::Succeeded(StoredImage {
                path,
                width: image.width(),
                height: image.height(),
            })
        }
        Err(e) => {
            tracing::warn!(url, error = ?e, "storing image failed: {}", e);
            TaskOutcome::Failed(e.kind())
        }
    }
}

fn persist(ctx: &TaskContext, image: &DynamicImage) -> Result<PathBuf, FetchError> {
    let dir = ctx.documents_dir.as_deref().ok_or(FetchError::NoDocumentsDir)?;
    storage::persist_png(dir, image)
}

/// Submits a task to the blocking pool of the current tokio runtime.
///
/// Must be called from within a runtime. There is no cancellation: once
/// submitted the task runs to success or failure.
pub fn submit_download(ctx: TaskContext, request: DownloadRequest) -> DownloadHandle {
    let url = request.url.clone();
    tracing::debug!(url = ?url, "download submitted");
    let join = tokio::task::spawn_blocking(move || run_fetch_and_persist(&ctx, &request));
    DownloadHandle::new(url, join)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_in(dir: &std::path::Path) -> TaskContext {
        TaskContext::new(dir)
    }

    #[test]
    fn absent_url_fails_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_fetch_and_persist(&ctx_in(dir.path()), &DownloadRequest::default());
        assert_eq!(out, TaskOutcome::Failed(ErrorKind::InvalidInput));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn empty_url_fails_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_fetch_and_persist(&ctx_in(dir.path()), &DownloadRequest::new(""));
        assert_eq!(out, TaskOutcome::Failed(ErrorKind::InvalidInput));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_documents_dir_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.png");
        image::RgbImage::new(2, 2).save(&src).unwrap();
        let ctx = TaskContext {
            documents_dir: None,
            fetch: FetchOptions::default(),
        };
        let url = format!("file://{}", src.display());
        let out = run_fetch_and_persist(&ctx, &DownloadRequest::new(url));
        assert_eq!(out, TaskOutcome::Failed(ErrorKind::WriteFailure));
    }

    #[test]
    fn file_url_image_is_stored() {
        let src_dir = tempfile::tempdir().unwrap();
        let docs = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("src.png");
        image::RgbImage::new(6, 3).save(&src).unwrap();
        let url = format!("file://{}", src.display());
        match run_fetch_and_persist(&ctx_in(docs.path()), &DownloadRequest::new(url)) {
            TaskOutcome::Succeeded(stored) => {
                assert_eq!((stored.width, stored.height), (6, 3));
                assert!(stored.path.starts_with(docs.path()));
                assert!(stored.path.exists());
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn submitted_task_reports_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let handle = submit_download(ctx_in(dir.path()), DownloadRequest::new(""));
        assert_eq!(handle.url(), Some(""));
        for _ in 0..200 {
            if handle.is_finished() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert!(handle.is_finished());
        assert_eq!(handle.outcome().await, TaskOutcome::Failed(ErrorKind::InvalidInput));
    }
}

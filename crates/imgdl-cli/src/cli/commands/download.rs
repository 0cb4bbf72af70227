//! `imgdl download <url>...` – submit one task per URL and report outcomes.

use anyhow::Result;
use imgdl_core::config::ImgdlConfig;
use imgdl_core::task::{submit_download, DownloadRequest, TaskContext, TaskOutcome};

pub async fn run_download(cfg: &ImgdlConfig, urls: Vec<String>) -> Result<bool> {
    let ctx = TaskContext::from_config(cfg);
    let handles: Vec<_> = urls
        .into_iter()
        .map(|url| submit_download(ctx.clone(), DownloadRequest::new(url)))
        .collect();

    let mut all_ok = true;
    for handle in handles {
        let url = handle.url().unwrap_or_default().to_string();
        match handle.outcome().await {
            TaskOutcome::Succeeded(stored) => {
                println!(
                    "ok {} ({}x{})",
                    stored.path.display(),
                    stored.width,
                    stored.height
                );
            }
            TaskOutcome::Failed(kind) => {
                all_ok = false;
                println!("failed {}: {}", url, kind);
            }
        }
    }
    Ok(all_ok)
}

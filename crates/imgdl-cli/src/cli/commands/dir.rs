//! `imgdl dir` – print the Documents directory.

use anyhow::{Context, Result};
use imgdl_core::config::ImgdlConfig;
use imgdl_core::storage;

pub fn run_dir(cfg: &ImgdlConfig) -> Result<bool> {
    let dir = storage::documents_dir(cfg).context("no Documents directory could be determined")?;
    println!("{}", dir.display());
    Ok(true)
}

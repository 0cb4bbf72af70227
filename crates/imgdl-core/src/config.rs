use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default cap on a downloaded body: 64 MiB.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

fn default_max_redirections() -> u32 {
    10
}

fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}

/// Global configuration loaded from `~/.config/imgdl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImgdlConfig {
    /// Directory used instead of the platform Documents directory (None = platform default).
    #[serde(default)]
    pub documents_dir: Option<PathBuf>,
    /// Connect timeout in seconds. None leaves libcurl's own default in place.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Maximum number of redirects followed by a fetch.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Largest response body accepted before the transfer is aborted.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,
}

impl Default for ImgdlConfig {
    fn default() -> Self {
        Self {
            documents_dir: None,
            connect_timeout_secs: None,
            max_redirections: default_max_redirections(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgdlConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path (tests, alternate profiles).
pub fn load_or_init_at(path: &Path) -> Result<ImgdlConfig> {
    if !path.exists() {
        let default_cfg = ImgdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ImgdlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

//! CLI for imgdl: the download screen and the image list screen as subcommands.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgdl_core::config::{self, ImgdlConfig};
use std::path::PathBuf;

use commands::{run_dir, run_download, run_gallery};

/// Top-level CLI for imgdl.
#[derive(Debug, Parser)]
#[command(name = "imgdl")]
#[command(about = "imgdl: download images by URL and list the stored ones", long_about = None)]
pub struct Cli {
    /// Use this directory instead of the configured/platform Documents directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub documents_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one or more images and store them as PNG files.
    Download {
        /// Image URLs; each one is fetched by its own task.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Decode and list every stored PNG image.
    Gallery,

    /// Print the Documents directory in use.
    Dir,
}

impl Cli {
    /// Merge command-line overrides into the loaded config.
    pub fn apply_overrides(&self, mut cfg: ImgdlConfig) -> ImgdlConfig {
        if let Some(dir) = &self.documents_dir {
            cfg.documents_dir = Some(dir.clone());
        }
        cfg
    }

    /// Parse args, load config and dispatch. Ok(false) means the command ran but reported failure.
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("using default config: {:#}", e);
                ImgdlConfig::default()
            }
        };
        let cfg = cli.apply_overrides(cfg);
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command {
            CliCommand::Download { urls } => run_download(&cfg, urls).await,
            CliCommand::Gallery => run_gallery(&cfg).await,
            CliCommand::Dir => run_dir(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;

//! CLI command handlers, one per file.

mod dir;
mod download;
mod gallery;

pub use dir::run_dir;
pub use download::run_download;
pub use gallery::run_gallery;

pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod gallery;
pub mod storage;
pub mod task;

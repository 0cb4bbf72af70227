//! Optional completion handle for a submitted task.

use super::TaskOutcome;
use crate::error::ErrorKind;
use tokio::task::JoinHandle;

/// Handle to a submitted download. Dropping it detaches the task.
#[derive(Debug)]
pub struct DownloadHandle {
    url: Option<String>,
    join: JoinHandle<TaskOutcome>,
}

impl DownloadHandle {
    pub(super) fn new(url: Option<String>, join: JoinHandle<TaskOutcome>) -> Self {
        Self { url, join }
    }

    /// URL the task was submitted with.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the task to finish. A task that panicked is reported as `WriteFailure`.
    pub async fn outcome(self) -> TaskOutcome {
        match self.join.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(url = ?self.url, "download task did not complete: {}", e);
                TaskOutcome::Failed(ErrorKind::WriteFailure)
            }
        }
    }
}

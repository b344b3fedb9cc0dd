//! Fetch outcome errors
//!
//! None of these reach the host as failures; they are returned from fetch
//! tickets so callers and tests can see why a response was not applied.

use ballkeeper_domain::BallkeeperError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("no item selected; nothing to fetch")]
    TargetMissing,

    #[error("fetch for generation {generation} failed after {attempts} attempt(s): {source}")]
    TransportFailure {
        generation: u64,
        attempts: u32,
        #[source]
        source: BallkeeperError,
    },

    #[error("response for generation {generation} discarded; generation {latest} is current")]
    StaleResponse { generation: u64, latest: u64 },

    #[error("fetch for generation {generation} cancelled")]
    Cancelled { generation: u64 },

    #[error("fetch task for generation {generation} did not complete: {message}")]
    TaskFailed { generation: u64, message: String },
}

impl SyncError {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TargetMissing => "target_missing",
            Self::TransportFailure { .. } => "transport_failure",
            Self::StaleResponse { .. } => "stale_response",
            Self::Cancelled { .. } => "cancelled",
            Self::TaskFailed { .. } => "task_failed",
        }
    }

    /// Whether the response was dropped because something newer exists.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::StaleResponse { .. } | Self::Cancelled { .. })
    }
}

impl From<SyncError> for BallkeeperError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::TargetMissing => BallkeeperError::InvalidInput(err.to_string()),
            SyncError::TransportFailure { source, .. } => source,
            SyncError::StaleResponse { .. } | SyncError::Cancelled { .. } => {
                BallkeeperError::Internal(err.to_string())
            }
            SyncError::TaskFailed { .. } => BallkeeperError::Internal(err.to_string()),
        }
    }
}

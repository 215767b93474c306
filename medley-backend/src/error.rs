//! Error taxonomy at the collaborator boundary.

use thiserror::Error;

/// Failures a backend collaborator can surface to the engine.
///
/// Retry policy deliberately lives outside this crate: a collaborator that
/// wants retries performs them before returning, and the engine never
/// retries on the caller's behalf.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The collaborator could not be reached at all: transport failure,
    /// expired session, missing permission to talk to the service.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator was reachable but refused the operation, typically
    /// a queue-prepare rejection (device busy, playback permission revoked).
    #[error("operation rejected by backend: {0}")]
    Rejected(String),
}

impl BackendError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

/// Convenience alias for collaborator results.
pub type Result<T> = std::result::Result<T, BackendError>;

//! Engine-level error taxonomy.

use thiserror::Error;

use medley_backend::BackendError;
use medley_model::{Backend, QueueKind};

/// Failures the engine surfaces to callers.
///
/// Malformed records never appear here: conversion failures are absorbed at
/// the converter (the record is dropped), since partial catalogs are an
/// expected, tolerable outcome. The engine performs no retries; retry
/// policy belongs to the caller or the collaborator.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested entity does not exist on the target backend.
    #[error("no {kind:?} with id '{id}' on the {backend:?} backend")]
    NotFound {
        backend: Backend,
        kind: QueueKind,
        id: String,
    },

    /// The backend refused to stage playback (device busy, permission
    /// revoked, session expired). The previously installed queue state is
    /// unspecified; re-query before resuming.
    #[error("backend refused to stage playback: {0}")]
    PrepareFailed(String),

    /// A collaborator could not be reached at all.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

impl From<BackendError> for EngineError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Unavailable(reason) => EngineError::Unavailable(reason),
            BackendError::Rejected(reason) => EngineError::PrepareFailed(reason),
        }
    }
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_backend_and_kind() {
        let error = EngineError::NotFound {
            backend: Backend::Catalog,
            kind: QueueKind::Playlist,
            id: "missing".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("Playlist"));
        assert!(text.contains("missing"));
        assert!(text.contains("Catalog"));
    }

    #[test]
    fn test_backend_rejection_maps_to_prepare_failed() {
        let error: EngineError = BackendError::rejected("device busy").into();
        assert!(matches!(error, EngineError::PrepareFailed(_)));

        let error: EngineError = BackendError::unavailable("offline").into();
        assert!(matches!(error, EngineError::Unavailable(_)));
    }
}

//! Error taxonomy for the triage engine.
//!
//! Each subsystem has its own enum; all of them fold into [`TriageError`].

mod classifier_error;
mod reference_error;
mod session_error;
mod storage_error;

pub use classifier_error::ClassifierError;
pub use reference_error::ReferenceError;
pub use session_error::SessionError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type TriageResult<T> = Result<T, TriageError>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("classifier failure: {0}")]
    ClassifierFailure(#[from] ClassifierError),

    #[error("reference data mismatch: {0}")]
    ReferenceDataMismatch(#[from] ReferenceError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("invalid answer code {code}: expected 1 (yes), 0 (no) or -1 (skip)")]
    InvalidAnswer { code: i64 },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

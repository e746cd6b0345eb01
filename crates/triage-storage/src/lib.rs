//! # triage-storage
//!
//! Durable session state in SQLite: WAL mode, one serialized writer, a small
//! read pool for file-backed databases, ordered migrations, and an event log
//! of every answer folded into a conversation.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use triage_core::errors::{StorageError, TriageError};

/// Wrap a SQLite failure message as a workspace error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> TriageError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

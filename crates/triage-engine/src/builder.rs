//! Assemble a `TriageEngine` from a `TriageConfig` and files on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use triage_classifier::LinearSoftmaxClassifier;
use triage_core::config::{StorageConfig, TriageConfig};
use triage_core::errors::TriageResult;
use triage_core::traits::ISessionStore;
use triage_reference::ReferenceTables;
use triage_session::SessionManager;
use triage_storage::StorageEngine;

use crate::engine::TriageEngine;

/// `db_path` value selecting the in-memory store.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

/// Where conversation state lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// DashMap store; state is lost on restart.
    InMemory,
    /// SQLite database file.
    Sqlite(PathBuf),
}

impl StoreBackend {
    pub fn from_config(config: &StorageConfig) -> Self {
        if config.db_path == IN_MEMORY_DB_PATH {
            Self::InMemory
        } else {
            Self::Sqlite(PathBuf::from(&config.db_path))
        }
    }

    pub fn open(&self, config: &StorageConfig) -> TriageResult<Arc<dyn ISessionStore>> {
        Ok(match self {
            Self::InMemory => Arc::new(SessionManager::new()),
            Self::Sqlite(path) => Arc::new(StorageEngine::open_with_config(path, config)?),
        })
    }
}

/// Load reference tables and the classifier artifact named in `config`,
/// open the configured store, and build the engine.
pub fn build_engine(config: TriageConfig) -> TriageResult<TriageEngine> {
    let tables = ReferenceTables::from_file(Path::new(&config.reference.tables_path))?;
    let classifier =
        LinearSoftmaxClassifier::from_file(Path::new(&config.reference.classifier_path))?;
    let store = StoreBackend::from_config(&config.storage).open(&config.storage)?;

    TriageEngine::new(Arc::new(tables), Arc::new(classifier), store, config)
}

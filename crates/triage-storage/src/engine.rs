//! StorageEngine: owns the ConnectionPool and implements ISessionStore on SQLite.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use triage_core::config::StorageConfig;
use triage_core::errors::TriageResult;
use triage_core::models::{Answer, ConversationId, SessionState};
use triage_core::traits::ISessionStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::event_ops::{self, AnswerEvent};
use crate::queries::session_ops;

/// SQLite-backed session store. Survives process restarts when file-backed.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> TriageResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine with explicit pool and timeout settings.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> TriageResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "session storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> TriageResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> TriageResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            let applied = migrations::run_migrations(conn)?;
            if applied > 0 {
                tracing::debug!(applied, "session schema migrated");
            }
            Ok(())
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> TriageResult<u32> {
        self.with_reader(migrations::current_version)
    }

    /// Answer log for one conversation, oldest first.
    pub fn answer_events(&self, id: &ConversationId) -> TriageResult<Vec<AnswerEvent>> {
        self.with_reader(|conn| event_ops::events_for(conn, id))
    }

    /// Delete conversations idle since before `cutoff`.
    pub fn purge_inactive_before(&self, cutoff: DateTime<Utc>) -> TriageResult<usize> {
        let removed = self
            .pool
            .writer
            .with_conn_sync(|conn| session_ops::delete_inactive_before(conn, cutoff))?;
        if removed > 0 {
            tracing::info!(removed, "purged inactive stored sessions");
        }
        Ok(removed)
    }

    fn with_reader<F, T>(&self, f: F) -> TriageResult<T>
    where
        F: FnOnce(&Connection) -> TriageResult<T>,
    {
        self.pool.read(f)
    }
}

impl ISessionStore for StorageEngine {
    fn load(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        self.with_reader(|conn| session_ops::get_session(conn, id))
    }

    fn save(&self, state: &SessionState) -> TriageResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| session_ops::upsert_session(conn, state))
    }

    /// State row and answer event commit together or not at all.
    fn save_with_answer(
        &self,
        state: &SessionState,
        question_id: usize,
        answer: Answer,
    ) -> TriageResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            session_ops::in_transaction(conn, "save_with_answer", |tx| {
                session_ops::upsert_session(tx, state)?;
                event_ops::insert_answer_event(tx, &state.conversation_id, question_id, answer)
            })
        })
    }

    /// Row overwrite and answer-log drop commit together or not at all.
    fn replace(&self, state: &SessionState) -> TriageResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| session_ops::replace_session(conn, state))
    }

    fn reset(&self, id: &ConversationId, reference_fingerprint: &str) -> TriageResult<SessionState> {
        let state = SessionState::new(id.clone(), reference_fingerprint);
        self.replace(&state)?;
        Ok(state)
    }

    fn remove(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        self.pool.writer.with_conn_sync(|conn| {
            session_ops::in_transaction(conn, "remove_session", |tx| {
                let existing = session_ops::get_session(tx, id)?;
                if existing.is_some() {
                    session_ops::delete_session_rows(tx, id)?;
                }
                Ok(existing)
            })
        })
    }

    fn conversation_ids(&self) -> TriageResult<Vec<ConversationId>> {
        self.with_reader(session_ops::list_session_ids)
    }
}

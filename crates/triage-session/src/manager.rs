//! SessionManager: concurrent per-conversation access via DashMap.

use dashmap::DashMap;
use std::sync::Arc;

use triage_core::errors::TriageResult;
use triage_core::models::{ConversationId, SessionState};
use triage_core::traits::ISessionStore;

/// Thread-safe in-memory session store.
///
/// State does not survive a restart; use the SQLite store for durability.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<DashMap<ConversationId, SessionState>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Get a conversation's state (cloned snapshot).
    pub fn get_session(&self, id: &ConversationId) -> Option<SessionState> {
        self.sessions.get(id).map(|r| r.clone())
    }

    /// Number of stored conversations.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove every conversation matching `predicate`. Returns how many were removed.
    pub fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&SessionState) -> bool,
    {
        let before = self.sessions.len();
        self.sessions.retain(|_, state| !predicate(state));
        before - self.sessions.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ISessionStore for SessionManager {
    fn load(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        Ok(self.get_session(id))
    }

    fn save(&self, state: &SessionState) -> TriageResult<()> {
        self.sessions
            .insert(state.conversation_id.clone(), state.clone());
        Ok(())
    }

    fn remove(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        Ok(self.sessions.remove(id).map(|(_, v)| v))
    }

    fn conversation_ids(&self) -> TriageResult<Vec<ConversationId>> {
        Ok(self.sessions.iter().map(|r| r.key().clone()).collect())
    }
}

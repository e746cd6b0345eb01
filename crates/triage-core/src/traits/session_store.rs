use crate::errors::TriageResult;
use crate::models::{Answer, ConversationId, SessionState};

/// Persistence for per-conversation state.
pub trait ISessionStore: Send + Sync {
    /// Load a conversation, `None` if it was never saved.
    fn load(&self, id: &ConversationId) -> TriageResult<Option<SessionState>>;

    /// Insert or replace a conversation's state.
    fn save(&self, state: &SessionState) -> TriageResult<()>;

    /// Persist a state together with the answer folded into it.
    /// Stores without an event log just save the state.
    fn save_with_answer(
        &self,
        state: &SessionState,
        _question_id: usize,
        _answer: Answer,
    ) -> TriageResult<()> {
        self.save(state)
    }

    /// Overwrite a conversation with `state` as one write, dropping anything
    /// recorded for its previous run. On error the stored conversation is
    /// left as it was.
    fn replace(&self, state: &SessionState) -> TriageResult<()> {
        self.save(state)
    }

    /// Start (or restart) a conversation with empty state and persist it.
    fn reset(&self, id: &ConversationId, reference_fingerprint: &str) -> TriageResult<SessionState> {
        let state = SessionState::new(id.clone(), reference_fingerprint);
        self.replace(&state)?;
        Ok(state)
    }

    /// Remove a conversation, returning its last state.
    fn remove(&self, id: &ConversationId) -> TriageResult<Option<SessionState>>;

    /// All stored conversation ids.
    fn conversation_ids(&self) -> TriageResult<Vec<ConversationId>>;
}

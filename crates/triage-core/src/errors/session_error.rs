/// Session lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("conversation not found: {conversation_id}")]
    NotFound { conversation_id: String },

    #[error("session state corrupted for {conversation_id}: {details}")]
    Corrupted {
        conversation_id: String,
        details: String,
    },

    #[error("conversation lock poisoned: {conversation_id}")]
    LockPoisoned { conversation_id: String },
}

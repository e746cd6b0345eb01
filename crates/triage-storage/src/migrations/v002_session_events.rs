//! v002: session_events (one row per answer folded into a conversation).

use rusqlite::Connection;

use triage_core::errors::TriageResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TriageResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS session_events (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            conversation_id TEXT NOT NULL,
            question_id     INTEGER NOT NULL,
            answer          TEXT NOT NULL,
            recorded_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            FOREIGN KEY (conversation_id) REFERENCES sessions(conversation_id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_session_events_conversation
            ON session_events(conversation_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

//! v001: sessions.

use rusqlite::Connection;

use triage_core::errors::TriageResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TriageResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS sessions (
            conversation_id       TEXT PRIMARY KEY,
            accumulated_text      TEXT NOT NULL DEFAULT '',
            scaled_idx            TEXT NOT NULL DEFAULT '[]',
            excluded_idx          TEXT NOT NULL DEFAULT '[]',
            asked_idx             TEXT NOT NULL DEFAULT '[]',
            last_question_id      INTEGER,
            reference_fingerprint TEXT NOT NULL,
            turns                 INTEGER NOT NULL DEFAULT 0,
            created_at            TEXT NOT NULL,
            last_activity         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_last_activity ON sessions(last_activity);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

//! Upsert, get, delete, and list for session rows.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use triage_core::errors::{SessionError, TriageResult};
use triage_core::models::{ConversationId, SessionState};

use crate::to_storage_err;

/// Insert or replace the full state of one conversation.
pub fn upsert_session(conn: &Connection, state: &SessionState) -> TriageResult<()> {
    conn.execute(
        "INSERT INTO sessions (
            conversation_id, accumulated_text, scaled_idx, excluded_idx, asked_idx,
            last_question_id, reference_fingerprint, turns, created_at, last_activity
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        ON CONFLICT(conversation_id) DO UPDATE SET
            accumulated_text = excluded.accumulated_text,
            scaled_idx = excluded.scaled_idx,
            excluded_idx = excluded.excluded_idx,
            asked_idx = excluded.asked_idx,
            last_question_id = excluded.last_question_id,
            reference_fingerprint = excluded.reference_fingerprint,
            turns = excluded.turns,
            created_at = excluded.created_at,
            last_activity = excluded.last_activity",
        params![
            state.conversation_id.as_str(),
            state.accumulated_text,
            index_set_to_json(&state.scaled_idx)?,
            index_set_to_json(&state.excluded_idx)?,
            index_set_to_json(&state.asked_idx)?,
            state.last_question_id.map(|id| id as i64),
            state.reference_fingerprint,
            state.turns as i64,
            state.created_at.to_rfc3339(),
            state.last_activity.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Load one conversation, `None` if it was never saved.
pub fn get_session(conn: &Connection, id: &ConversationId) -> TriageResult<Option<SessionState>> {
    let raw = conn
        .query_row(
            "SELECT conversation_id, accumulated_text, scaled_idx, excluded_idx, asked_idx,
                    last_question_id, reference_fingerprint, turns, created_at, last_activity
             FROM sessions WHERE conversation_id = ?1",
            params![id.as_str()],
            RawSession::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(RawSession::into_state).transpose()
}

/// Delete a conversation and its answer log. Returns whether a row existed.
pub fn delete_session(conn: &Connection, id: &ConversationId) -> TriageResult<bool> {
    in_transaction(conn, "delete_session", |tx| {
        delete_session_rows(tx, id).map(|deleted| deleted > 0)
    })
}

/// Overwrite a conversation with `state`, dropping any answer log of its
/// previous run. Both happen in one transaction.
pub fn replace_session(conn: &Connection, state: &SessionState) -> TriageResult<()> {
    in_transaction(conn, "replace_session", |tx| {
        delete_session_rows(tx, &state.conversation_id)?;
        upsert_session(tx, state)
    })
}

/// Row deletion without its own transaction, for composing inside one.
pub(crate) fn delete_session_rows(conn: &Connection, id: &ConversationId) -> TriageResult<usize> {
    conn.execute(
        "DELETE FROM session_events WHERE conversation_id = ?1",
        params![id.as_str()],
    )
    .and_then(|_| {
        conn.execute(
            "DELETE FROM sessions WHERE conversation_id = ?1",
            params![id.as_str()],
        )
    })
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
pub(crate) fn in_transaction<F, T>(conn: &Connection, op: &str, f: F) -> TriageResult<T>
where
    F: FnOnce(&Connection) -> TriageResult<T>,
{
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("{op} begin: {e}")))?;

    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{op} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// All stored conversation ids, oldest first.
pub fn list_session_ids(conn: &Connection) -> TriageResult<Vec<ConversationId>> {
    let mut stmt = conn
        .prepare("SELECT conversation_id FROM sessions ORDER BY created_at, conversation_id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.map(|r| r.map(ConversationId::from).map_err(|e| to_storage_err(e.to_string())))
        .collect()
}

/// Delete conversations idle since before `cutoff`. Returns the number removed.
pub fn delete_inactive_before(conn: &Connection, cutoff: DateTime<Utc>) -> TriageResult<usize> {
    let cutoff = cutoff.to_rfc3339();
    in_transaction(conn, "delete_inactive", |tx| {
        tx.execute(
            "DELETE FROM session_events WHERE conversation_id IN
                (SELECT conversation_id FROM sessions WHERE last_activity < ?1)",
            params![cutoff],
        )
        .and_then(|_| {
            tx.execute(
                "DELETE FROM sessions WHERE last_activity < ?1",
                params![cutoff],
            )
        })
        .map_err(|e| to_storage_err(e.to_string()))
    })
}

/// Column values as stored, before decoding.
struct RawSession {
    conversation_id: String,
    accumulated_text: String,
    scaled_idx: String,
    excluded_idx: String,
    asked_idx: String,
    last_question_id: Option<i64>,
    reference_fingerprint: String,
    turns: i64,
    created_at: String,
    last_activity: String,
}

impl RawSession {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            conversation_id: row.get(0)?,
            accumulated_text: row.get(1)?,
            scaled_idx: row.get(2)?,
            excluded_idx: row.get(3)?,
            asked_idx: row.get(4)?,
            last_question_id: row.get(5)?,
            reference_fingerprint: row.get(6)?,
            turns: row.get(7)?,
            created_at: row.get(8)?,
            last_activity: row.get(9)?,
        })
    }

    fn into_state(self) -> TriageResult<SessionState> {
        let id = self.conversation_id.clone();
        let corrupted = |details: String| SessionError::Corrupted {
            conversation_id: id.clone(),
            details,
        };

        let last_question_id = match self.last_question_id {
            None => None,
            Some(q) => Some(
                usize::try_from(q).map_err(|_| corrupted(format!("negative question id {q}")))?,
            ),
        };
        let turns = u64::try_from(self.turns)
            .map_err(|_| corrupted(format!("negative turn count {}", self.turns)))?;

        let state = SessionState {
            conversation_id: ConversationId::from(self.conversation_id),
            accumulated_text: self.accumulated_text,
            scaled_idx: index_set_from_json(&self.scaled_idx).map_err(&corrupted)?,
            excluded_idx: index_set_from_json(&self.excluded_idx).map_err(&corrupted)?,
            asked_idx: index_set_from_json(&self.asked_idx).map_err(&corrupted)?,
            last_question_id,
            reference_fingerprint: self.reference_fingerprint,
            turns,
            created_at: parse_timestamp(&self.created_at).map_err(&corrupted)?,
            last_activity: parse_timestamp(&self.last_activity).map_err(&corrupted)?,
        };

        if !state.is_consistent() {
            return Err(corrupted("answered index sets overlap or escape asked_idx".into()).into());
        }
        Ok(state)
    }
}

fn index_set_to_json(set: &BTreeSet<usize>) -> TriageResult<String> {
    serde_json::to_string(set).map_err(|e| to_storage_err(e.to_string()))
}

fn index_set_from_json(raw: &str) -> Result<BTreeSet<usize>, String> {
    serde_json::from_str(raw).map_err(|e| format!("bad index set {raw:?}: {e}"))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("bad timestamp {raw:?}: {e}"))
}

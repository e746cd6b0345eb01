//! Append-only answer log.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use triage_core::errors::TriageResult;
use triage_core::models::{Answer, ConversationId};

use crate::to_storage_err;

/// One answer folded into a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvent {
    pub question_id: usize,
    pub answer: Answer,
    pub recorded_at: DateTime<Utc>,
}

pub fn insert_answer_event(
    conn: &Connection,
    id: &ConversationId,
    question_id: usize,
    answer: Answer,
) -> TriageResult<()> {
    conn.execute(
        "INSERT INTO session_events (conversation_id, question_id, answer, recorded_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            id.as_str(),
            question_id as i64,
            answer.as_str(),
            Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Answer history for a conversation, in the order the answers arrived.
pub fn events_for(conn: &Connection, id: &ConversationId) -> TriageResult<Vec<AnswerEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT question_id, answer, recorded_at FROM session_events
             WHERE conversation_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![id.as_str()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let (question_id, answer, recorded_at) = row.map_err(|e| to_storage_err(e.to_string()))?;
        events.push(AnswerEvent {
            question_id: usize::try_from(question_id)
                .map_err(|_| to_storage_err(format!("negative question id {question_id}")))?,
            answer: parse_answer(&answer)?,
            recorded_at: DateTime::parse_from_rfc3339(&recorded_at)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| to_storage_err(format!("bad timestamp {recorded_at:?}: {e}")))?,
        });
    }
    Ok(events)
}

/// Number of answers logged for a conversation.
pub fn count_events(conn: &Connection, id: &ConversationId) -> TriageResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM session_events WHERE conversation_id = ?1",
            params![id.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

fn parse_answer(raw: &str) -> TriageResult<Answer> {
    match raw {
        "yes" => Ok(Answer::Yes),
        "no" => Ok(Answer::No),
        "skip" => Ok(Answer::Skip),
        other => Err(to_storage_err(format!("unknown answer {other:?} in event log"))),
    }
}

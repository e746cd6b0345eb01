//! SessionState: everything a conversation carries between calls.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Answer, ConversationId};

/// Per-conversation state: accumulated text, answered sets, pending question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub conversation_id: ConversationId,
    /// All symptom text received so far, append-only.
    pub accumulated_text: String,
    /// Conditions answered "yes".
    pub scaled_idx: BTreeSet<usize>,
    /// Conditions answered "no".
    pub excluded_idx: BTreeSet<usize>,
    /// Conditions whose question has been posed and answered, whatever the answer.
    pub asked_idx: BTreeSet<usize>,
    /// Question awaiting an answer. `None` before the first question is asked.
    pub last_question_id: Option<usize>,
    /// Fingerprint of the reference bundle the conversation was started with.
    pub reference_fingerprint: String,
    /// Number of answers folded into the state.
    pub turns: u64,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl SessionState {
    pub fn new(conversation_id: ConversationId, reference_fingerprint: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            conversation_id,
            accumulated_text: String::new(),
            scaled_idx: BTreeSet::new(),
            excluded_idx: BTreeSet::new(),
            asked_idx: BTreeSet::new(),
            last_question_id: None,
            reference_fingerprint: reference_fingerprint.into(),
            turns: 0,
            created_at: now,
            last_activity: now,
        }
    }

    /// Clear everything except the conversation id and fingerprint.
    pub fn reset(&mut self) {
        let now = Utc::now();
        self.accumulated_text.clear();
        self.scaled_idx.clear();
        self.excluded_idx.clear();
        self.asked_idx.clear();
        self.last_question_id = None;
        self.turns = 0;
        self.created_at = now;
        self.last_activity = now;
    }

    /// Append a text fragment, separated from earlier text by a single space.
    /// Whitespace-only fragments are ignored.
    pub fn append_text(&mut self, delta: &str) {
        let delta = delta.trim();
        if delta.is_empty() {
            return;
        }
        if !self.accumulated_text.is_empty() {
            self.accumulated_text.push(' ');
        }
        self.accumulated_text.push_str(delta);
    }

    /// Fold an answer to the pending question into the index sets.
    ///
    /// Returns the id of the question that was consumed. `Answer::None`, or no
    /// pending question, changes nothing.
    pub fn record_answer(&mut self, answer: Answer) -> Option<usize> {
        let qid = self.last_question_id?;
        match answer {
            Answer::None => return None,
            Answer::Yes => {
                self.excluded_idx.remove(&qid);
                self.scaled_idx.insert(qid);
            }
            Answer::No => {
                self.scaled_idx.remove(&qid);
                self.excluded_idx.insert(qid);
            }
            Answer::Skip => {}
        }
        self.asked_idx.insert(qid);
        self.last_question_id = None;
        self.turns += 1;
        Some(qid)
    }

    /// Whether any answer changed the distribution (yes or no so far).
    pub fn has_probability_updates(&self) -> bool {
        !self.scaled_idx.is_empty() || !self.excluded_idx.is_empty()
    }

    /// `asked ⊇ scaled ∪ excluded` and `scaled ∩ excluded = ∅`.
    pub fn is_consistent(&self) -> bool {
        self.scaled_idx.is_subset(&self.asked_idx)
            && self.excluded_idx.is_subset(&self.asked_idx)
            && self.scaled_idx.is_disjoint(&self.excluded_idx)
    }

    /// Pending question in the wire encoding, `-1` when none.
    pub fn last_question_code(&self) -> i64 {
        self.last_question_id.map_or(-1, |id| id as i64)
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    /// Duration since the conversation started.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.created_at
    }
}

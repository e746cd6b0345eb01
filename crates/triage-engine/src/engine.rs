//! TriageEngine: one conversation turn: load → classify → update → select →
//! rank → persist.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use triage_classifier::validate_distribution;
use triage_core::config::TriageConfig;
use triage_core::errors::{ReferenceError, SessionError, TriageError, TriageResult};
use triage_core::models::{
    Answer, ConversationId, InferenceResult, ProbabilityVector, QuestionStatus, SessionState,
};
use triage_core::traits::{IConditionClassifier, ISessionStore};
use triage_reference::ReferenceTables;

use crate::ranking::{self, Rankings};
use crate::selector::{self, Selection};
use crate::transform::group_sums;
use crate::updater::{self, UpdateOutcome};

/// The adaptive triage engine. Shared across threads; state lives in the store.
pub struct TriageEngine {
    tables: Arc<ReferenceTables>,
    classifier: Arc<dyn IConditionClassifier>,
    store: Arc<dyn ISessionStore>,
    config: TriageConfig,
    /// Serializes calls for the same conversation.
    locks: DashMap<ConversationId, Arc<Mutex<()>>>,
}

impl TriageEngine {
    pub fn new(
        tables: Arc<ReferenceTables>,
        classifier: Arc<dyn IConditionClassifier>,
        store: Arc<dyn ISessionStore>,
        config: TriageConfig,
    ) -> TriageResult<Self> {
        if classifier.num_classes() != tables.num_conditions() {
            return Err(ReferenceError::LengthMismatch {
                expected: tables.num_conditions(),
                actual: classifier.num_classes(),
            }
            .into());
        }
        validate_engine_config(&config)?;

        tracing::info!(
            classifier = classifier.name(),
            conditions = tables.num_conditions(),
            subspecialties = tables.num_subspecialties(),
            doctors = tables.num_doctors(),
            fingerprint = tables.fingerprint(),
            "triage engine ready"
        );

        Ok(Self {
            tables,
            classifier,
            store,
            config,
            locks: DashMap::new(),
        })
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ISessionStore> {
        &self.store
    }

    /// Run one turn of a conversation.
    ///
    /// `first_call` starts the conversation over: state is replaced and the
    /// initial question is returned. Otherwise `last_answer` answers the
    /// question returned by the previous call. State is persisted only when
    /// the whole turn succeeds.
    pub fn infer(
        &self,
        conversation_id: &ConversationId,
        text_delta: &str,
        first_call: bool,
        last_answer: Answer,
    ) -> TriageResult<InferenceResult> {
        let span = crate::infer_span!(conversation_id, first_call);
        let _enter = span.enter();

        self.with_conversation_lock(conversation_id, || {
            self.turn(conversation_id, text_delta, first_call, last_answer)
        })
    }

    fn turn(
        &self,
        conversation_id: &ConversationId,
        text_delta: &str,
        first_call: bool,
        last_answer: Answer,
    ) -> TriageResult<InferenceResult> {
        let mut state = if first_call {
            SessionState::new(conversation_id.clone(), self.tables.fingerprint())
        } else {
            let state =
                self.store
                    .load(conversation_id)?
                    .ok_or_else(|| SessionError::NotFound {
                        conversation_id: conversation_id.to_string(),
                    })?;
            self.tables.check_fingerprint(&state.reference_fingerprint)?;
            state
        };
        state.append_text(text_delta);
        state.touch();

        let mut probs = self.classify(&state.accumulated_text)?;

        let outcome = {
            let span = crate::update_span!(last_answer);
            let _enter = span.enter();
            updater::apply_answer(&mut state, &mut probs, last_answer, &self.tables)?
        };

        let (question_id, next_question, status) = if first_call {
            state.last_question_id = None;
            (
                None,
                self.config.questions.initial_question.clone(),
                QuestionStatus::Initial,
            )
        } else if outcome.degenerate {
            state.last_question_id = None;
            self.exhausted()
        } else if let (None, Some(pending)) = (outcome.consumed, state.last_question_id) {
            tracing::debug!(question_id = pending, "no answer given, question stays pending");
            (
                Some(pending),
                self.tables.question(pending)?.to_string(),
                QuestionStatus::Asking,
            )
        } else {
            let selection = self.select(&probs, &state);
            state.last_question_id = selection.next_id;
            match selection.next_id {
                Some(id) => (
                    Some(id),
                    self.tables.question(id)?.to_string(),
                    QuestionStatus::Asking,
                ),
                None => self.exhausted(),
            }
        };

        let rankings = self.rank(&probs)?;

        self.persist(&state, &outcome, first_call)?;

        tracing::info!(
            question_id = ?question_id,
            status = ?status,
            turns = state.turns,
            asked = state.asked_idx.len(),
            "turn complete"
        );

        Ok(InferenceResult {
            next_question,
            question_id,
            status,
            subspecialty_results: rankings.subspecialties,
            condition_results: rankings.conditions,
            doctor_results: rankings.doctors,
        })
    }

    /// Wire-level entry: answers arrive as `1` yes, `0` no, `-1` skip, or absent.
    pub fn infer_with_code(
        &self,
        conversation_id: &ConversationId,
        text_delta: &str,
        first_call: bool,
        last_answer_code: Option<i64>,
    ) -> TriageResult<InferenceResult> {
        let answer = Answer::from_optional_code(last_answer_code)?;
        self.infer(conversation_id, text_delta, first_call, answer)
    }

    /// Same as [`infer_with_code`](Self::infer_with_code), rendered as JSON.
    pub fn infer_json(
        &self,
        conversation_id: &ConversationId,
        text_delta: &str,
        first_call: bool,
        last_answer_code: Option<i64>,
    ) -> TriageResult<String> {
        let result =
            self.infer_with_code(conversation_id, text_delta, first_call, last_answer_code)?;
        Ok(serde_json::to_string(&result)?)
    }

    /// Open a new conversation with a fresh id.
    pub fn start_conversation(
        &self,
        text: &str,
    ) -> TriageResult<(ConversationId, InferenceResult)> {
        let id = ConversationId::generate();
        let result = self.infer(&id, text, true, Answer::None)?;
        Ok((id, result))
    }

    /// Forget a conversation. Returns its final state, if it existed.
    /// Waits for a turn in flight on the same conversation to finish first.
    pub fn end_conversation(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        self.with_conversation_lock(id, || self.store.remove(id))
    }

    /// Number of conversations with a call currently holding or waiting on
    /// their lock. Zero when the engine is idle.
    pub fn tracked_conversations(&self) -> usize {
        self.locks.len()
    }

    /// Run `f` while holding the conversation's lock. The lock entry is
    /// dropped afterwards unless another caller still holds a handle to it.
    fn with_conversation_lock<T>(
        &self,
        id: &ConversationId,
        f: impl FnOnce() -> TriageResult<T>,
    ) -> TriageResult<T> {
        let result = {
            let lock = self.locks.entry(id.clone()).or_default().clone();
            let result = match lock.lock() {
                Ok(_guard) => f(),
                Err(_) => Err(SessionError::LockPoisoned {
                    conversation_id: id.to_string(),
                }
                .into()),
            };
            result
        };
        self.locks.remove_if(id, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    fn classify(&self, text: &str) -> TriageResult<ProbabilityVector> {
        let probs = self.classifier.score(text)?;
        validate_distribution(&probs)?;
        self.tables.check_vector_len(probs.len())?;
        Ok(probs)
    }

    fn select(&self, probs: &ProbabilityVector, state: &SessionState) -> Selection {
        let span = crate::select_span!(state.asked_idx.len());
        let _enter = span.enter();

        let selection = selector::select_next(
            probs.as_slice(),
            self.tables.group_map(),
            self.tables.num_subspecialties(),
            &state.asked_idx,
            self.config.questions.dominant_group_fallback,
        );
        tracing::debug!(
            dominant_group = selection.dominant_group,
            next_id = ?selection.next_id,
            fell_back = selection.fell_back,
            "question selected"
        );
        selection
    }

    fn rank(&self, probs: &ProbabilityVector) -> TriageResult<Rankings> {
        let span = crate::rank_span!(self.config.engine.top_k);
        let _enter = span.enter();

        let sums = group_sums(
            probs.as_slice(),
            self.tables.group_map(),
            self.tables.num_subspecialties(),
        );
        ranking::rank_all(probs.as_slice(), &sums, &self.tables, &self.config.engine)
    }

    /// A first call replaces whatever an earlier run of this conversation
    /// left behind in a single store write.
    fn persist(
        &self,
        state: &SessionState,
        outcome: &UpdateOutcome,
        first_call: bool,
    ) -> TriageResult<()> {
        if first_call {
            return self.store.replace(state);
        }
        match outcome.consumed {
            Some((question_id, answer)) => self.store.save_with_answer(state, question_id, answer),
            None => self.store.save(state),
        }
    }

    fn exhausted(&self) -> (Option<usize>, String, QuestionStatus) {
        (
            None,
            self.config.questions.exhausted_question.clone(),
            QuestionStatus::Exhausted,
        )
    }
}

fn validate_engine_config(config: &TriageConfig) -> TriageResult<()> {
    let engine = &config.engine;
    if engine.top_k == 0 {
        return Err(TriageError::ConfigError {
            reason: "engine.top_k must be at least 1".into(),
        });
    }
    for (name, alpha) in [
        ("engine.subspecialty_alpha", engine.subspecialty_alpha),
        ("engine.doctor_alpha", engine.doctor_alpha),
    ] {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(TriageError::ConfigError {
                reason: format!("{name} must be a positive number, got {alpha}"),
            });
        }
    }
    Ok(())
}

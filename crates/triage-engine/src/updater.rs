//! Distribution updater: folds the pending question's answer into the session
//! and reshapes the classifier output with everything answered so far.

use triage_core::errors::TriageResult;
use triage_core::models::{Answer, ProbabilityVector, SessionState};
use triage_reference::ReferenceTables;

/// What one update step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Question consumed by this call's answer, with the answer given.
    pub consumed: Option<(usize, Answer)>,
    /// Every remaining condition was zeroed; the vector was left unnormalized.
    pub degenerate: bool,
}

/// Record `answer` against the pending question, then apply scalers and
/// exclusions to `probs` and renormalize.
///
/// Nothing in `state` changes when the pending question is not a known condition.
pub fn apply_answer(
    state: &mut SessionState,
    probs: &mut ProbabilityVector,
    answer: Answer,
    tables: &ReferenceTables,
) -> TriageResult<UpdateOutcome> {
    if let Some(pending) = state.last_question_id {
        tables.condition(pending)?;
    }
    let consumed = state.record_answer(answer).map(|qid| (qid, answer));
    let degenerate = reshape(state, probs, tables)?;
    Ok(UpdateOutcome {
        consumed,
        degenerate,
    })
}

/// Multiply every "yes" condition by its scaler, zero every "no" condition,
/// and renormalize when either set is non-empty.
///
/// Returns `true` when the remaining mass is zero; the vector is then left
/// as zeros instead of being divided.
pub fn reshape(
    state: &SessionState,
    probs: &mut ProbabilityVector,
    tables: &ReferenceTables,
) -> TriageResult<bool> {
    if !state.has_probability_updates() {
        return Ok(false);
    }

    for &id in &state.scaled_idx {
        let scaler = tables.scaler(id)?;
        if let Some(p) = probs.as_mut_slice().get_mut(id) {
            *p *= scaler;
        }
    }
    for &id in &state.excluded_idx {
        tables.condition(id)?;
        if let Some(p) = probs.as_mut_slice().get_mut(id) {
            *p = 0.0;
        }
    }

    let normalized = probs.normalize();
    if !normalized {
        tracing::warn!(
            conversation_id = %state.conversation_id,
            excluded = state.excluded_idx.len(),
            "distribution collapsed after exclusions"
        );
    }
    Ok(!normalized)
}

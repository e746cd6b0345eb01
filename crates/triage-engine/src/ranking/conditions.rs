use triage_core::errors::TriageResult;
use triage_core::models::{round_to, ConditionResult};
use triage_reference::ReferenceTables;

use crate::transform::descending_order;

/// The `k` most probable conditions, rounded for display.
pub fn top_conditions(
    probs: &[f64],
    tables: &ReferenceTables,
    k: usize,
    decimals: u32,
) -> TriageResult<Vec<ConditionResult>> {
    descending_order(probs)
        .into_iter()
        .take(k)
        .map(|id| {
            Ok(ConditionResult {
                condition: tables.condition(id)?.name.clone(),
                probability: round_to(probs[id], decimals),
            })
        })
        .collect()
}

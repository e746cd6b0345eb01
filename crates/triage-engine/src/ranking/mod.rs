//! Secondary rankings derived from the updated distribution.

pub mod conditions;
pub mod doctors;
pub mod subspecialty;

use triage_core::config::EngineConfig;
use triage_core::errors::TriageResult;
use triage_core::models::{ConditionResult, DoctorResults, SubspecialtyResult};
use triage_reference::ReferenceTables;

pub use conditions::top_conditions;
pub use doctors::{doctor_scores, rank_doctors};
pub use subspecialty::rank_subspecialties;

/// Everything the caller sees besides the next question.
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings {
    pub subspecialties: Vec<SubspecialtyResult>,
    pub conditions: Vec<ConditionResult>,
    pub doctors: DoctorResults,
}

/// Compute all three rankings from `probs` and its per-group sums.
pub fn rank_all(
    probs: &[f64],
    group_sums: &[f64],
    tables: &ReferenceTables,
    config: &EngineConfig,
) -> TriageResult<Rankings> {
    Ok(Rankings {
        conditions: top_conditions(probs, tables, config.top_k, config.display_decimals)?,
        subspecialties: rank_subspecialties(
            group_sums,
            tables,
            config.subspecialty_alpha,
            config.display_decimals,
        )?,
        doctors: rank_doctors(probs, tables, config.doctor_alpha)?,
    })
}

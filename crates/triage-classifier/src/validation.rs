//! Checks applied to every classifier output before it reaches the updater.

use triage_core::errors::{ClassifierError, TriageResult};
use triage_core::models::ProbabilityVector;

/// Tolerance for the classifier's sum-to-one contract before a warning is logged.
const SUM_WARN_TOLERANCE: f64 = 1e-3;

/// Reject non-finite, negative, or all-zero vectors.
///
/// Length is checked against the reference tables separately.
pub fn validate_distribution(p: &ProbabilityVector) -> TriageResult<()> {
    for (index, &value) in p.as_slice().iter().enumerate() {
        if !value.is_finite() {
            return Err(ClassifierError::NonFinite { index, value }.into());
        }
        if value < 0.0 {
            return Err(ClassifierError::Negative { index, value }.into());
        }
    }
    let total = p.sum();
    if total <= 0.0 {
        return Err(ClassifierError::ZeroMass.into());
    }
    if (total - 1.0).abs() > SUM_WARN_TOLERANCE {
        tracing::warn!(sum = total, "classifier output does not sum to one");
    }
    Ok(())
}

use crate::errors::TriageResult;
use crate::models::ProbabilityVector;

/// Text classifier over the condition catalog.
///
/// Implementations must be pure: the same text always yields the same vector.
pub trait IConditionClassifier: Send + Sync {
    /// Score the full accumulated text. Index `i` of the result is condition `i`.
    fn score(&self, text: &str) -> TriageResult<ProbabilityVector>;

    /// Number of condition classes produced by `score`.
    fn num_classes(&self) -> usize;

    /// Human-readable classifier name.
    fn name(&self) -> &str;
}

//! Output of one inference call.

use serde::{Deserialize, Serialize};

use crate::constants::DOCTOR_MATCH_LABELS;

/// Where the conversation stands after this call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    /// First call; the initial question is returned.
    Initial,
    /// A follow-up question about a specific condition is pending.
    Asking,
    /// Nothing left to ask, or the distribution collapsed.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubspecialtyResult {
    /// 1-based position in the descending ranking.
    pub rank: usize,
    pub subspecialty_name: String,
    pub subspecialty_short: String,
    /// Power-transformed confidence in [0, 1].
    pub percent_match: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub condition: String,
    pub probability: f64,
}

/// Top three doctors, best first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoctorResults {
    pub best: String,
    pub second: String,
    pub third: String,
}

impl DoctorResults {
    /// Pairs of ("Best Match", name), ("Second Match", name), ("Third Match", name).
    pub fn labelled(&self) -> [(&'static str, &str); 3] {
        [
            (DOCTOR_MATCH_LABELS[0], self.best.as_str()),
            (DOCTOR_MATCH_LABELS[1], self.second.as_str()),
            (DOCTOR_MATCH_LABELS[2], self.third.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub next_question: String,
    /// Condition probed by `next_question`, if any.
    pub question_id: Option<usize>,
    pub status: QuestionStatus,
    pub subspecialty_results: Vec<SubspecialtyResult>,
    pub condition_results: Vec<ConditionResult>,
    pub doctor_results: DoctorResults,
}

/// Round `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Convert a probability in [0, 1] to an integer percentage.
/// Values above 1 are taken to be percentages already.
pub fn percent_as_int(value: f64) -> u8 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let pct = if value <= 1.0 { value * 100.0 } else { value };
    pct.round().min(100.0) as u8
}

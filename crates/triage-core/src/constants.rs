/// Triage engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of subspecialty groups in the production reference data.
pub const SUBSPECIALTY_COUNT: usize = 6;

/// Sentinel returned as the question on the first call of a conversation.
pub const INITIAL_QUESTION_SENTINEL: &str = "Q_INIT";

/// Tolerance used when checking that a distribution sums to one.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Display labels for the doctor ranking, best first.
pub const DOCTOR_MATCH_LABELS: [&str; 3] = ["Best Match", "Second Match", "Third Match"];

/// Wire codes for answers.
pub const ANSWER_CODE_YES: i64 = 1;
pub const ANSWER_CODE_NO: i64 = 0;
pub const ANSWER_CODE_SKIP: i64 = -1;

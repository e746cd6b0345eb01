use serde::{Deserialize, Serialize};

/// One of the medical-specialty buckets conditions are partitioned into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubspecialtyGroup {
    pub id: usize,
    /// Display name, e.g. "Reproductive Endocrinology".
    pub name: String,
    /// Short code, e.g. "REI".
    pub short: String,
}

/// One row of the condition table. `id` lines up with the probability vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub id: usize,
    pub name: String,
    /// Subspecialty group id.
    pub subspecialty: usize,
    /// Multiplier applied when the condition's question is answered "yes".
    pub scaler: f64,
    /// Follow-up question that probes this condition.
    pub question: String,
}

/// Entry of the doctor catalog. `id` is the column in the weight matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: usize,
    pub name: String,
}

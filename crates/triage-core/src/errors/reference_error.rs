/// Reference tables disagree with each other or with the classifier.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("classifier produced {actual} probabilities but reference tables have {expected} conditions")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("condition {condition_id} has no reference row")]
    UnknownCondition { condition_id: usize },

    #[error("condition {condition_id} references unknown subspecialty {subspecialty_id}")]
    UnknownSubspecialty {
        condition_id: usize,
        subspecialty_id: usize,
    },

    #[error("doctor weight row {condition_id} has {actual} columns, expected {expected}")]
    DoctorRowWidth {
        condition_id: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid reference table {table}: {reason}")]
    InvalidTable { table: String, reason: String },

    #[error("conversation started with reference bundle {expected}, engine has {actual}")]
    FingerprintMismatch { expected: String, actual: String },
}

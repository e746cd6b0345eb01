/// Failures of the text-scoring collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("non-finite probability {value} at condition {index}")]
    NonFinite { index: usize, value: f64 },

    #[error("negative probability {value} at condition {index}")]
    Negative { index: usize, value: f64 },

    #[error("classifier returned an all-zero distribution")]
    ZeroMass,

    #[error("invalid model artifact: {reason}")]
    InvalidArtifact { reason: String },
}

//! # triage-core
//!
//! Foundation crate for the triage engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TriageConfig;
pub use errors::{TriageError, TriageResult};
pub use models::{
    Answer, ConditionRecord, ConversationId, Doctor, InferenceResult, ProbabilityVector,
    SessionState, SubspecialtyGroup,
};

//! Data model shared by every crate.

mod answer;
mod conversation;
mod inference_result;
mod probability;
mod reference;
mod session_state;

pub use answer::Answer;
pub use conversation::ConversationId;
pub use inference_result::{
    percent_as_int, round_to, ConditionResult, DoctorResults, InferenceResult, QuestionStatus,
    SubspecialtyResult,
};
pub use probability::ProbabilityVector;
pub use reference::{ConditionRecord, Doctor, SubspecialtyGroup};
pub use session_state::SessionState;

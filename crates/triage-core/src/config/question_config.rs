use serde::{Deserialize, Serialize};

use super::defaults;

/// Question selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    /// Question returned on the first call of a conversation.
    pub initial_question: String,
    /// Question returned once nothing is left to ask.
    pub exhausted_question: String,
    /// Ask inside the dominant group once every other group is exhausted.
    pub dominant_group_fallback: bool,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            initial_question: defaults::DEFAULT_INITIAL_QUESTION.to_string(),
            exhausted_question: defaults::DEFAULT_EXHAUSTED_QUESTION.to_string(),
            dominant_group_fallback: defaults::DEFAULT_DOMINANT_GROUP_FALLBACK,
        }
    }
}

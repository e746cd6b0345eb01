use serde::{Deserialize, Serialize};

use crate::constants::{ANSWER_CODE_NO, ANSWER_CODE_SKIP, ANSWER_CODE_YES};
use crate::errors::{TriageError, TriageResult};

/// Reply to the last question asked in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    /// Confirms the condition; its probability is amplified by the scaler.
    Yes,
    /// Rules the condition out; its probability is zeroed.
    No,
    /// Marks the question as asked without changing any probability.
    Skip,
    /// No answer supplied with this call.
    #[default]
    None,
}

impl Answer {
    /// Decode the wire encoding: `1` yes, `0` no, `-1` skip.
    pub fn from_code(code: i64) -> TriageResult<Self> {
        match code {
            ANSWER_CODE_YES => Ok(Self::Yes),
            ANSWER_CODE_NO => Ok(Self::No),
            ANSWER_CODE_SKIP => Ok(Self::Skip),
            other => Err(TriageError::InvalidAnswer { code: other }),
        }
    }

    /// Decode an optional wire code; a missing code means no answer.
    pub fn from_optional_code(code: Option<i64>) -> TriageResult<Self> {
        code.map_or(Ok(Self::None), Self::from_code)
    }

    /// Wire code for this answer, `None` when no answer was given.
    pub fn code(self) -> Option<i64> {
        match self {
            Self::Yes => Some(ANSWER_CODE_YES),
            Self::No => Some(ANSWER_CODE_NO),
            Self::Skip => Some(ANSWER_CODE_SKIP),
            Self::None => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Skip => "skip",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};

use crate::constants::DYNAMIC_QUESTION_ID_START;
use crate::errors::{PalateError, PalateResult};

/// Presentation kind of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Yes / No / Don't Care.
    Binary,
    /// One of the question's declared choice strings.
    MultipleChoice,
}

impl QuestionKind {
    /// Wire string used by the storage layer.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Binary => "BINARY",
            QuestionKind::MultipleChoice => "MULTIPLE_CHOICE",
        }
    }

    /// Parse the wire string. Unknown kinds are a data error, not a panic.
    pub fn parse(raw: &str) -> PalateResult<Self> {
        match raw {
            "BINARY" => Ok(QuestionKind::Binary),
            "MULTIPLE_CHOICE" => Ok(QuestionKind::MultipleChoice),
            other => Err(PalateError::InvalidData {
                reason: format!("unknown question kind: {other}"),
            }),
        }
    }
}

/// A unit of interrogation. Catalog questions (id < 5000) are persisted;
/// dynamic questions (id >= 5000) are synthesized per session and live only
/// in the dynamic pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub kind: QuestionKind,
    pub choices: Vec<String>,
    /// Key into the attribute evaluator's vocabulary.
    pub attribute: String,
    /// Importance weight, 1-10.
    pub weight: u8,
}

impl Question {
    /// True for synthesized, session-scoped questions.
    pub fn is_dynamic(&self) -> bool {
        self.id >= DYNAMIC_QUESTION_ID_START
    }
}

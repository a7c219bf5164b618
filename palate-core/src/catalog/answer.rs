use std::fmt;

use serde::{Deserialize, Serialize};

/// A user's answer to a question.
///
/// Binary questions answer with the literal strings "Yes", "No", or
/// "Don't Care". Anything else (a multiple-choice selection or malformed
/// input) parses to [`Answer::Choice`] and takes the neutral scoring path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    DontCare,
    Choice(String),
}

impl Answer {
    /// Parse an answer literal. Total: never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Yes" => Answer::Yes,
            "No" => Answer::No,
            "Don't Care" => Answer::DontCare,
            other => Answer::Choice(other.to_string()),
        }
    }

    /// The literal string form, as recorded in the preference map.
    pub fn as_str(&self) -> &str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::DontCare => "Don't Care",
            Answer::Choice(s) => s,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Player settings persisted between runs

use serde::{Deserialize, Serialize};
use trivia_domain::{DomainError, Question, parse_question_set};

/// Persisted player settings.
///
/// The question set is kept as the raw JSON text the player supplied, so a
/// malformed set survives a save/load cycle unchanged and can be fixed later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bearer token for the grading endpoint
    pub api_token: String,
    /// JSON array of `{question, answer}` records
    pub question_set_json: String,
    /// Speak every AI message once it has been typed out
    pub auto_speak: bool,
}

impl Settings {
    /// A game can only start with both a token and a question set.
    pub fn is_complete(&self) -> bool {
        !self.api_token.trim().is_empty() && !self.question_set_json.trim().is_empty()
    }

    pub fn questions(&self) -> Result<Vec<Question>, DomainError> {
        parse_question_set(&self.question_set_json)
    }
}

//! Question value object and question-set parsing

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A trivia question together with its expected answer (Value Object)
///
/// Question sets are authored as JSON arrays of
/// `{"question": "...", "answer": "..."}` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question: String,
    answer: String,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The text shown to the player
    pub fn text(&self) -> &str {
        &self.question
    }

    /// The expected answer, only ever sent to the grader
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Parse a question set from its JSON text.
///
/// The callers treat any error here as an empty set; the error is still
/// returned so it can be logged.
pub fn parse_question_set(json: &str) -> Result<Vec<Question>, DomainError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(|e| DomainError::InvalidQuestionSet(e.to_string()))
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Invalid question set: {0}")]
    InvalidQuestionSet(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Session already finished")]
    SessionFinished,
}

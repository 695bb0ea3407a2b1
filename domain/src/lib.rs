//! Domain layer for trivia-grader
//!
//! This crate contains the core game entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`Session`] walks through an ordered set of [`Question`]s. Each question
//! gets its own grading conversation ([`Transcript`]), seeded with an
//! instruction that names the expected answer.
//!
//! ## Verdict
//!
//! The grader's reply is a free-text [`Verdict`]. The literal token `YES` is
//! the only success signal; anything else is a hint shown back to the player
//! after the answer text has been scrubbed out of it.

pub mod config;
pub mod core;
pub mod game;
pub mod grading;
pub mod session;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError,
    question::{Question, parse_question_set},
    string::truncate,
};
pub use game::{phase::GamePhase, texts::GameTexts};
pub use grading::{
    prompt::{ACKNOWLEDGEMENT, seed_instruction},
    redaction::RedactionPolicy,
    verdict::{SUCCESS_TOKEN, Verdict, incorrect_message},
};
pub use session::{
    entities::{Message, Role, Session},
    transcript::Transcript,
};

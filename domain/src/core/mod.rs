//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: one trivia question with its expected answer
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;

//! Game session domain.
//!
//! - [`entities::Session`]: the ordered questions and the player's position
//! - [`entities::Message`]: a single message within a grading conversation
//! - [`transcript::Transcript`]: the grading conversation for one question

pub mod entities;
pub mod transcript;

//! Grading conversation transcript

use super::entities::{Message, Role};
use crate::grading::prompt::{ACKNOWLEDGEMENT, seed_instruction};

/// The grading conversation for a single question.
///
/// Always starts with the seed pair (instruction naming the answer, then the
/// assistant's acknowledgement) followed by alternating user/assistant
/// turns. The only way to add turns is [`Transcript::push_exchange`], which
/// keeps the alternation intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a conversation for a question whose answer is `answer`.
    pub fn seeded(answer: &str) -> Self {
        Self {
            messages: vec![
                Message::user(seed_instruction(answer)),
                Message::assistant(ACKNOWLEDGEMENT),
            ],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of graded attempts after the seed pair
    pub fn attempts(&self) -> usize {
        self.messages.len().saturating_sub(2) / 2
    }

    pub fn push_exchange(&mut self, answer: impl Into<String>, verdict: impl Into<String>) {
        self.messages.push(Message::user(answer));
        self.messages.push(Message::assistant(verdict));
    }

    /// The latest assistant turn, if any attempt has been graded
    pub fn last_verdict(&self) -> Option<&str> {
        if self.attempts() == 0 {
            return None;
        }
        self.messages
            .last()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
    }
}

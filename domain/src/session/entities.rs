//! Session domain entities

use super::transcript::Transcript;
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Role of a message in a grading conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a grading conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A single play-through of a question set (Entity)
///
/// Owns the questions, the index of the question being asked and the
/// grading conversation for that question. The transcript is `None` until
/// the first answer to a question is graded, and goes back to `None`
/// whenever the player advances.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    transcript: Option<Transcript>,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            transcript: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently being asked, `None` once finished
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// Messages to send for grading `answer`: the current transcript (seeded
    /// if this is the first attempt) followed by the new user turn.
    ///
    /// Does not modify the session; call [`Session::record_exchange`] once
    /// the verdict arrives.
    pub fn grading_request(&self, answer: &str) -> Result<Vec<Message>, DomainError> {
        let question = self.current_question().ok_or(DomainError::SessionFinished)?;
        let mut messages = match &self.transcript {
            Some(transcript) => transcript.messages().to_vec(),
            None => Transcript::seeded(question.answer()).messages().to_vec(),
        };
        messages.push(Message::user(answer));
        Ok(messages)
    }

    /// Record a completed user/assistant exchange in the transcript.
    pub fn record_exchange(
        &mut self,
        answer: impl Into<String>,
        verdict: impl Into<String>,
    ) -> Result<(), DomainError> {
        let question = self.current_question().ok_or(DomainError::SessionFinished)?;
        let seed_answer = question.answer().to_string();
        self.transcript
            .get_or_insert_with(|| Transcript::seeded(&seed_answer))
            .push_exchange(answer, verdict);
        Ok(())
    }

    /// Move to the next question, discarding the grading conversation.
    pub fn advance(&mut self) -> Result<(), DomainError> {
        if self.is_finished() {
            return Err(DomainError::SessionFinished);
        }
        self.transcript = None;
        self.current_index += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(vec![
            Question::new("2+2?", "4"),
            Question::new("Capital of France?", "Paris"),
        ])
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let json = serde_json::to_string(&Message::assistant("OK")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"OK"}"#);
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let s = session();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.current_question().unwrap().text(), "2+2?");
        assert!(s.transcript().is_none());
        assert!(!s.is_finished());
    }

    #[test]
    fn test_grading_request_seeds_first_attempt() {
        let s = session();
        let messages = s.grading_request("5").unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::User);
        assert!(messages[0].content.contains("\"4\""));
        assert_eq!(messages[1], Message::assistant("OK"));
        assert_eq!(messages[2], Message::user("5"));
        // Building a request does not touch the transcript
        assert!(s.transcript().is_none());
    }

    #[test]
    fn test_record_exchange_accumulates() {
        let mut s = session();
        s.record_exchange("5", "Not correct").unwrap();
        assert_eq!(s.transcript().unwrap().len(), 4);

        let messages = s.grading_request("3").unwrap();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[3], Message::assistant("Not correct"));

        s.record_exchange("3", "Still no").unwrap();
        assert_eq!(s.transcript().unwrap().len(), 6);
    }

    #[test]
    fn test_advance_resets_transcript() {
        let mut s = session();
        s.record_exchange("4", "YES").unwrap();
        s.advance().unwrap();
        assert_eq!(s.current_index(), 1);
        assert!(s.transcript().is_none());

        // The new question's seed names the new answer
        let messages = s.grading_request("Lyon").unwrap();
        assert!(messages[0].content.contains("\"Paris\""));
    }

    #[test]
    fn test_advance_past_end() {
        let mut s = session();
        s.advance().unwrap();
        s.advance().unwrap();
        assert!(s.is_finished());
        assert!(s.current_question().is_none());
        assert!(matches!(s.advance(), Err(DomainError::SessionFinished)));
        assert!(matches!(
            s.grading_request("x"),
            Err(DomainError::SessionFinished)
        ));
    }

    #[test]
    fn test_empty_session_is_finished() {
        let s = Session::new(Vec::new());
        assert!(s.is_empty());
        assert!(s.is_finished());
    }
}

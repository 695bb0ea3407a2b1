//! Verdict value object

use super::redaction::RedactionPolicy;

/// The only reply token the grader can use to accept an answer
pub const SUCCESS_TOKEN: &str = "YES";

/// A grader reply, interpreted (Value Object)
///
/// Both variants carry the reply after redaction. The success check always
/// looks at the raw reply, so a redaction that happens to swallow the token
/// (for an answer such as "yes") cannot turn a correct answer into a wrong
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { shown: String },
    Incorrect { shown: String },
}

impl Verdict {
    /// Interpret a raw grader reply for a question whose answer is `answer`.
    pub fn judge(raw: &str, answer: &str, policy: &RedactionPolicy) -> Self {
        let shown = policy.apply(raw, answer);
        if raw.contains(SUCCESS_TOKEN) {
            Verdict::Correct { shown }
        } else {
            Verdict::Incorrect { shown }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    /// The reply text that is safe to show
    pub fn shown(&self) -> &str {
        match self {
            Verdict::Correct { shown } | Verdict::Incorrect { shown } => shown,
        }
    }
}

/// Message shown after a wrong answer: the hint, then the question again.
///
/// One trailing period is dropped from the hint so the joining `". "` does
/// not double it.
pub fn incorrect_message(hint: &str, question: &str) -> String {
    let hint = hint.trim_end();
    let hint = hint.strip_suffix('.').unwrap_or(hint);
    if hint.is_empty() {
        return question.to_string();
    }
    format!("{}. {}", hint, question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_is_correct() {
        let v = Verdict::judge("YES", "4", &RedactionPolicy::default());
        assert!(v.is_correct());
        assert_eq!(v.shown(), "YES");
    }

    #[test]
    fn test_yes_anywhere_is_correct() {
        let v = Verdict::judge("YES, well done", "4", &RedactionPolicy::default());
        assert!(v.is_correct());
    }

    #[test]
    fn test_lowercase_yes_is_not_correct() {
        let v = Verdict::judge("yes", "4", &RedactionPolicy::default());
        assert!(!v.is_correct());
    }

    #[test]
    fn test_incorrect_reply_is_redacted() {
        let v = Verdict::judge("Not quite, think Paris", "Paris", &RedactionPolicy::default());
        assert!(!v.is_correct());
        assert!(!v.shown().contains("Paris"));
        assert_eq!(v.shown(), "Not quite, think _____");
    }

    #[test]
    fn test_redaction_cannot_hide_success_token() {
        let v = Verdict::judge("YES", "yes", &RedactionPolicy::default());
        assert!(v.is_correct());
        assert_eq!(v.shown(), "_____");
    }

    #[test]
    fn test_incorrect_message() {
        assert_eq!(
            incorrect_message("Not correct, try again", "2+2?"),
            "Not correct, try again. 2+2?"
        );
        assert_eq!(
            incorrect_message("Not correct, try again.", "2+2?"),
            "Not correct, try again. 2+2?"
        );
        assert_eq!(incorrect_message("Wait... ", "2+2?"), "Wait... 2+2?");
        assert_eq!(incorrect_message("", "2+2?"), "2+2?");
    }
}

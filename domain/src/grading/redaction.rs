//! Answer redaction for grader replies

use regex::RegexBuilder;

/// Default placeholder shown in place of a leaked answer
pub const DEFAULT_PLACEHOLDER: &str = "_____";

/// Safety filter that removes the expected answer from grader replies.
///
/// The grader is instructed never to reveal the answer, but nothing forces
/// it to comply. Every occurrence of the answer (case-insensitive, literal
/// match) is replaced with the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionPolicy {
    pub enabled: bool,
    pub placeholder: String,
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl RedactionPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace every occurrence of `answer` in `text`.
    pub fn apply(&self, text: &str, answer: &str) -> String {
        let answer = answer.trim();
        if !self.enabled || answer.is_empty() {
            return text.to_string();
        }

        match RegexBuilder::new(&regex::escape(answer))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re
                .replace_all(text, regex::NoExpand(&self.placeholder))
                .into_owned(),
            // An escaped literal always compiles unless it exceeds the size limit
            Err(_) => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_case_insensitively() {
        let policy = RedactionPolicy::default();
        assert_eq!(
            policy.apply("Not quite, think Paris", "Paris"),
            "Not quite, think _____"
        );
        assert_eq!(
            policy.apply("paris or PARIS?", "Paris"),
            "_____ or _____?"
        );
    }

    #[test]
    fn test_answer_is_matched_literally() {
        let policy = RedactionPolicy::default();
        assert_eq!(policy.apply("Is it 2+2 or 22?", "2+2"), "Is it _____ or 22?");
        assert_eq!(policy.apply("a.b and axb", "a.b"), "_____ and axb");
    }

    #[test]
    fn test_placeholder_is_not_expanded() {
        let policy = RedactionPolicy::default().with_placeholder("$0");
        assert_eq!(policy.apply("think Paris", "Paris"), "think $0");
    }

    #[test]
    fn test_untouched_without_match() {
        let policy = RedactionPolicy::default();
        assert_eq!(policy.apply("Try again", "Paris"), "Try again");
    }

    #[test]
    fn test_disabled_or_blank_answer() {
        assert_eq!(
            RedactionPolicy::disabled().apply("think Paris", "Paris"),
            "think Paris"
        );
        assert_eq!(
            RedactionPolicy::default().apply("anything", "   "),
            "anything"
        );
    }
}

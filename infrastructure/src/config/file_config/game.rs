//! Game configuration from TOML (`[game]` and `[messages]` sections)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use trivia_application::AnimationTimings;
use trivia_domain::{ConfigIssue, ConfigIssueCode, GameTexts, RedactionPolicy, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Milliseconds between revealed characters (default: 100)
    pub typing_interval_ms: u64,
    /// Milliseconds between loading-dot frames (default: 500)
    pub loading_interval_ms: u64,
    /// Pause after a correct answer before the next question (default: 1000)
    pub advance_delay_ms: u64,
    /// Scrub the expected answer out of the grader's replies (default: true)
    pub redact_answers: bool,
    /// Replacement text for scrubbed answers
    pub placeholder: String,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let timings = AnimationTimings::default();
        Self {
            typing_interval_ms: timings.typing_interval.as_millis() as u64,
            loading_interval_ms: timings.loading_interval.as_millis() as u64,
            advance_delay_ms: timings.advance_delay.as_millis() as u64,
            redact_answers: true,
            placeholder: RedactionPolicy::default().placeholder,
        }
    }
}

impl FileGameConfig {
    /// Convert to timings; `grading_timeout` comes from the provider section.
    pub fn to_timings(&self, grading_timeout: Duration) -> AnimationTimings {
        AnimationTimings {
            typing_interval: Duration::from_millis(self.typing_interval_ms),
            loading_interval: Duration::from_millis(self.loading_interval_ms),
            advance_delay: Duration::from_millis(self.advance_delay_ms),
            grading_timeout,
        }
    }

    /// Convert to a redaction policy, falling back to the default
    /// placeholder when the configured one is blank.
    pub fn to_redaction(&self) -> (RedactionPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut policy = if self.redact_answers {
            RedactionPolicy::default()
        } else {
            RedactionPolicy::disabled()
        };

        if self.placeholder.trim().is_empty() {
            if self.redact_answers {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyPlaceholder,
                    message: format!(
                        "game.placeholder: empty, using '{}'",
                        RedactionPolicy::default().placeholder
                    ),
                });
            }
        } else {
            policy = policy.with_placeholder(self.placeholder.clone());
        }

        (policy, issues)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("game.typing_interval_ms", self.typing_interval_ms),
            ("game.loading_interval_ms", self.loading_interval_ms),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::zero_interval(field));
            }
        }
        issues.extend(self.to_redaction().1);
        issues
    }
}

const PRESETS: &[&str] = &["fi", "en"];

/// Player-facing texts: a language preset plus per-text overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMessagesConfig {
    /// "fi" (default) or "en"
    pub preset: String,
    pub correct: Option<String>,
    pub finished: Option<String>,
    pub no_questions: Option<String>,
}

impl Default for FileMessagesConfig {
    fn default() -> Self {
        Self {
            preset: "fi".to_string(),
            correct: None,
            finished: None,
            no_questions: None,
        }
    }
}

impl FileMessagesConfig {
    pub fn to_texts(&self) -> (GameTexts, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut texts = match self.preset.trim().to_lowercase().as_str() {
            "fi" | "" => GameTexts::default(),
            "en" => GameTexts::english(),
            other => {
                issues.push(ConfigIssue::invalid_value("messages.preset", other, PRESETS));
                GameTexts::default()
            }
        };

        if let Some(ref correct) = self.correct {
            texts.correct = correct.clone();
        }
        if let Some(ref finished) = self.finished {
            texts.finished = finished.clone();
        }
        if let Some(ref no_questions) = self.no_questions {
            texts.no_questions = no_questions.clone();
        }

        (texts, issues)
    }
}

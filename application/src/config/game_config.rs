//! Conversation engine tuning.
//!
//! [`GameConfig`] groups the static parameters of a game: animation
//! timings, the fixed texts and the redaction filter. These are
//! application-layer concerns; the infrastructure config loader maps the
//! `[game]` and `[messages]` TOML sections onto them.

use std::time::Duration;
use trivia_domain::{GameTexts, RedactionPolicy};

/// Animation and delay timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Delay between revealed characters of the typing animation.
    pub typing_interval: Duration,
    /// Delay between frames of the loading dots.
    pub loading_interval: Duration,
    /// Pause after the correct-answer message before the next question.
    pub advance_delay: Duration,
    /// Upper bound for one grading round-trip.
    pub grading_timeout: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(100),
            loading_interval: Duration::from_millis(500),
            advance_delay: Duration::from_secs(1),
            grading_timeout: Duration::from_secs(60),
        }
    }
}

/// Everything the engine needs besides its collaborators.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub timings: AnimationTimings,
    pub texts: GameTexts,
    pub redaction: RedactionPolicy,
}

impl GameConfig {
    // ==================== Builder Methods ====================

    pub fn with_timings(mut self, timings: AnimationTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_texts(mut self, texts: GameTexts) -> Self {
        self.texts = texts;
        self
    }

    pub fn with_redaction(mut self, redaction: RedactionPolicy) -> Self {
        self.redaction = redaction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = AnimationTimings::default();
        assert_eq!(t.typing_interval, Duration::from_millis(100));
        assert_eq!(t.loading_interval, Duration::from_millis(500));
        assert_eq!(t.advance_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_texts(GameTexts::english())
            .with_redaction(RedactionPolicy::disabled());
        assert_eq!(config.texts.correct, "Correct!");
        assert!(!config.redaction.enabled);
    }
}

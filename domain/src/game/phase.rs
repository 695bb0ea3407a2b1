//! Conversation engine phases

use serde::{Deserialize, Serialize};

/// Where the conversation engine is in its turn-taking loop
///
/// ```text
/// Idle ──start──> AwaitingInput ──Enter──> Grading ──YES──> Advancing ──┬──> AwaitingInput
///                       ^                     │                        └──> Finished
///                       └──── wrong / error ──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Idle,
    AwaitingInput,
    Grading,
    Advancing,
    Finished,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::AwaitingInput => "awaiting_input",
            GamePhase::Grading => "grading",
            GamePhase::Advancing => "advancing",
            GamePhase::Finished => "finished",
        }
    }

    /// Whether Enter may submit the pending answer
    pub fn accepts_submit(&self) -> bool {
        matches!(self, GamePhase::AwaitingInput)
    }

    /// Whether typed characters still edit the pending answer
    pub fn accepts_typing(&self) -> bool {
        matches!(
            self,
            GamePhase::AwaitingInput | GamePhase::Grading | GamePhase::Advancing
        )
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GamePhase::Idle => "Idle",
            GamePhase::AwaitingInput => "Your answer",
            GamePhase::Grading => "Grading",
            GamePhase::Advancing => "Correct",
            GamePhase::Finished => "Finished",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_awaiting_input_submits() {
        assert!(GamePhase::AwaitingInput.accepts_submit());
        assert!(!GamePhase::Grading.accepts_submit());
        assert!(!GamePhase::Advancing.accepts_submit());
        assert!(!GamePhase::Finished.accepts_submit());
        assert!(!GamePhase::Idle.accepts_submit());
    }

    #[test]
    fn test_typing_stops_when_finished() {
        assert!(GamePhase::Grading.accepts_typing());
        assert!(!GamePhase::Finished.accepts_typing());
        assert!(!GamePhase::Idle.accepts_typing());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&GamePhase::AwaitingInput).unwrap();
        assert_eq!(json, "\"awaiting_input\"");
        assert_eq!(GamePhase::AwaitingInput.as_str(), "awaiting_input");
    }
}

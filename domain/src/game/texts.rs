//! Fixed texts the engine shows to the player

use serde::{Deserialize, Serialize};

/// Fixed player-facing messages
///
/// Defaults are the Finnish texts the game ships with; every field can be
/// overridden from the `[messages]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTexts {
    /// Shown after a correct answer, before the next question
    pub correct: String,
    /// Shown once every question has been answered
    pub finished: String,
    /// Shown when the question set has no questions
    pub no_questions: String,
}

impl Default for GameTexts {
    fn default() -> Self {
        Self {
            correct: "Oikein!".to_string(),
            finished: "Kiitos pelaamisesta! Voit aloittaa alusta painamalla \"F5\"".to_string(),
            no_questions: "Kysymyslista on tyhjä. Avaa asetukset painamalla \"F2\"".to_string(),
        }
    }
}

impl GameTexts {
    /// English texts, selectable with `messages.preset = "en"`
    pub fn english() -> Self {
        Self {
            correct: "Correct!".to_string(),
            finished: "Thanks for playing! Press \"F5\" to start over".to_string(),
            no_questions: "The question set is empty. Press \"F2\" to open settings".to_string(),
        }
    }
}

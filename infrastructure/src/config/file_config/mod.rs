//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod game;
mod provider;
mod speech;

pub use game::{FileGameConfig, FileMessagesConfig};
pub use provider::{FileProviderConfig, TOKEN_ENV};
pub use speech::{FileLoggingConfig, FileSpeechConfig};

use serde::{Deserialize, Serialize};
use trivia_application::GameConfig;
use trivia_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Grading endpoint
    pub provider: FileProviderConfig,
    /// Animation timings and answer redaction
    pub game: FileGameConfig,
    /// Player-facing texts
    pub messages: FileMessagesConfig,
    /// Text-to-speech
    pub speech: FileSpeechConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.provider.validate());
        issues.extend(self.game.validate());
        issues.extend(self.messages.to_texts().1);
        issues
    }

    /// Build the engine configuration. Issues are reported by [`validate`](Self::validate).
    pub fn to_game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_timings(self.game.to_timings(self.provider.timeout()))
            .with_texts(self.messages.to_texts().0)
            .with_redaction(self.game.to_redaction().0)
    }
}

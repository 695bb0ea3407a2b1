//! Speech and logging configuration from TOML (`[speech]`, `[logging]`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    /// Disable to never look for a speech command
    pub enabled: bool,
    /// Voice language prefix, e.g. "fi" or "en-GB"
    pub locale: String,
    /// Voice name preferred among those matching the locale
    pub preferred_voice: Option<String>,
    /// Explicit speech command; discovered on PATH when unset
    pub command: Option<String>,
}

impl Default for FileSpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: "fi".to_string(),
            preferred_voice: None,
            command: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation log; no conversation log when unset
    pub conversation_log: Option<PathBuf>,
    /// Directory for the diagnostic log (default: data dir `logs/`)
    pub log_dir: Option<PathBuf>,
}

//! Settings stored as a JSON file

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trivia_application::{Settings, SettingsError, SettingsRepository};

const SETTINGS_FILE: &str = "settings.json";

/// [`SettingsRepository`] backed by a JSON file.
///
/// A missing file loads as defaults. When the stored token is empty the
/// first non-empty variable from `token_env` fills it in; such a token is
/// never written back to disk.
pub struct JsonSettingsRepository {
    path: PathBuf,
    token_env: Vec<String>,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            token_env: Vec::new(),
        }
    }

    /// Repository at `$XDG_DATA_HOME/trivia-grader/settings.json`
    pub fn in_data_dir() -> Result<Self, SettingsError> {
        let dir = dirs::data_dir().ok_or(SettingsError::NoLocation)?;
        Ok(Self::new(dir.join("trivia-grader").join(SETTINGS_FILE)))
    }

    pub fn with_token_env(mut self, vars: Vec<String>) -> Self {
        self.token_env = vars;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn env_token(&self) -> Option<String> {
        self.token_env
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }

    fn read_file(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_json::from_str(&text).map_err(|e| SettingsError::Malformed(e.to_string()))
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Result<Settings, SettingsError> {
        let mut settings = self.read_file()?;
        if settings.api_token.trim().is_empty()
            && let Some(token) = self.env_token()
        {
            debug!("Using API token from environment");
            settings.api_token = token;
        }
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let mut stored = settings.clone();
        if self
            .env_token()
            .is_some_and(|token| token == stored.api_token.trim())
        {
            stored.api_token.clear();
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| SettingsError::Malformed(e.to_string()))?;
        fs::write(&self.path, json)?;
        info!("Settings written to {}", self.path.display());
        Ok(())
    }
}

//! Settings repository port

use crate::config::Settings;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is malformed: {0}")]
    Malformed(String),

    #[error("No settings location available")]
    NoLocation,
}

/// Load and save the player's settings.
///
/// A repository with nothing stored yet returns [`Settings::default()`].
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> Result<Settings, SettingsError>;

    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings kept only for the lifetime of the process.
#[derive(Default)]
pub struct InMemorySettingsRepository {
    settings: Mutex<Settings>,
}

impl InMemorySettingsRepository {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsRepository for InMemorySettingsRepository {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self
            .settings
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Ok(mut stored) = self.settings.lock() {
            *stored = settings.clone();
        }
        Ok(())
    }
}

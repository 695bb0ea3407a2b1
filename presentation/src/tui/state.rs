//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by [`TuiPresenter`](super::presenter::TuiPresenter) from engine
//! events and by the app loop from key actions.

use std::path::Path;
use std::time::{Duration, Instant};
use trivia_application::Settings;
use trivia_domain::{GamePhase, parse_question_set};

/// Which overlay, if any, covers the game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
    Settings,
}

/// Focusable fields of the settings overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    ApiToken,
    QuestionFile,
    AutoSpeak,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            Self::ApiToken => Self::QuestionFile,
            Self::QuestionFile => Self::AutoSpeak,
            Self::AutoSpeak => Self::ApiToken,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::ApiToken => Self::AutoSpeak,
            Self::QuestionFile => Self::ApiToken,
            Self::AutoSpeak => Self::QuestionFile,
        }
    }
}

/// Editable copy of the player's settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub api_token: String,
    /// Path of a question-set file to import; empty keeps the current set
    pub question_file: String,
    pub auto_speak: bool,
    pub focus: SettingsField,
    /// Questions in the currently saved set, `None` if it does not parse
    pub current_questions: Option<usize>,
    pub error: Option<String>,
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_token: settings.api_token.clone(),
            question_file: String::new(),
            auto_speak: settings.auto_speak,
            focus: SettingsField::default(),
            current_questions: settings.questions().ok().map(|q| q.len()),
            error: None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type into the focused field; space toggles the auto-speak checkbox.
    pub fn input(&mut self, c: char) {
        self.error = None;
        match self.focus {
            SettingsField::ApiToken => self.api_token.push(c),
            SettingsField::QuestionFile => self.question_file.push(c),
            SettingsField::AutoSpeak => {
                if c == ' ' {
                    self.auto_speak = !self.auto_speak;
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            SettingsField::ApiToken => {
                self.api_token.pop();
            }
            SettingsField::QuestionFile => {
                self.question_file.pop();
            }
            SettingsField::AutoSpeak => {}
        }
    }

    /// Merge the form into `current`, importing the question file if one
    /// was given. The file must hold a valid question set.
    pub fn apply_to(&self, current: &Settings) -> Result<Settings, String> {
        let mut settings = current.clone();
        settings.api_token = self.api_token.trim().to_string();
        settings.auto_speak = self.auto_speak;

        let file = self.question_file.trim();
        if !file.is_empty() {
            let path = Path::new(file);
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
            parse_question_set(&json).map_err(|e| e.to_string())?;
            settings.question_set_json = json;
        }

        Ok(settings)
    }
}

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Default)]
pub struct TuiState {
    // -- Game --
    pub phase: GamePhase,
    pub question_index: usize,
    pub total_questions: usize,
    pub ai_text: String,
    pub ai_text_complete: bool,
    pub answer: String,
    pub last_verdict: Option<bool>,

    // -- Overlays --
    pub overlay: Overlay,
    pub settings_form: SettingsForm,
    pub flash_message: Option<(String, Instant)>,

    // -- Capabilities --
    pub speech_available: bool,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous game's screen
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::Idle;
        self.question_index = 0;
        self.total_questions = 0;
        self.ai_text.clear();
        self.ai_text_complete = false;
        self.answer.clear();
        self.last_verdict = None;
    }

    /// 1-based question number for display, clamped to the set size
    pub fn question_number(&self) -> usize {
        (self.question_index + 1).min(self.total_questions)
    }

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= ttl
        {
            self.flash_message = None;
        }
    }

    pub fn open_settings(&mut self, settings: &Settings) {
        self.settings_form = SettingsForm::from_settings(settings);
        self.overlay = Overlay::Settings;
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            _ => Overlay::Help,
        };
    }
}

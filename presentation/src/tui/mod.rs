//! Terminal UI for trivia-grader
//!
//! A single game screen (header, AI text, answer input, status bar) with
//! help and settings overlays, built on ratatui.

mod app;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{KeyAction, handle_key_event};
pub use presenter::TuiPresenter;
pub use state::{Overlay, SettingsField, SettingsForm, TuiState};

//! Key mapping
//!
//! Maps crossterm key events to semantic [`KeyAction`]s. The mapping depends
//! on which overlay is open: answer keys go to the engine only when no
//! overlay covers the game.

use super::state::Overlay;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use trivia_application::KeyInput;

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,

    // -- Game --
    /// Forward to the engine
    Answer(KeyInput),
    OpenSettings,
    ReplaySpeech,
    Restart,
    ToggleHelp,
    CloseHelp,

    // -- Settings overlay --
    SettingsNextField,
    SettingsPrevField,
    SettingsInput(char),
    SettingsBackspace,
    SettingsSave,
    SettingsCancel,
}

/// Map a key event to an action given the open overlay.
///
/// `answer_empty` makes `?` a help shortcut only while nothing is typed.
pub fn handle_key_event(overlay: Overlay, answer_empty: bool, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match overlay {
        Overlay::None => handle_game(answer_empty, key),
        Overlay::Help => handle_help(key),
        Overlay::Settings => handle_settings(key),
    }
}

fn handle_game(answer_empty: bool, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::F(1) => KeyAction::ToggleHelp,
        KeyCode::F(2) => KeyAction::OpenSettings,
        KeyCode::F(3) => KeyAction::ReplaySpeech,
        KeyCode::F(5) => KeyAction::Restart,
        KeyCode::Char('?') if answer_empty => KeyAction::ToggleHelp,
        KeyCode::Enter => KeyAction::Answer(KeyInput::Enter),
        KeyCode::Backspace => KeyAction::Answer(KeyInput::Backspace),
        KeyCode::Char(c) if !has_command_modifier(key.modifiers) => {
            KeyAction::Answer(KeyInput::Char(c))
        }
        _ => KeyAction::None,
    }
}

fn handle_help(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => KeyAction::CloseHelp,
        _ => KeyAction::None,
    }
}

fn handle_settings(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Tab | KeyCode::Down => KeyAction::SettingsNextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::SettingsPrevField,
        KeyCode::Enter => KeyAction::SettingsSave,
        KeyCode::Esc => KeyAction::SettingsCancel,
        KeyCode::Backspace => KeyAction::SettingsBackspace,
        KeyCode::Char(c) if !has_command_modifier(key.modifiers) => KeyAction::SettingsInput(c),
        _ => KeyAction::None,
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

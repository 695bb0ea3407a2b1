//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                   TriviaEngine task (spawned per game)
//!   ├─ crossterm EventStream                ├─ commands.recv()
//!   ├─ ui_rx (UiEvent from engine)  <───────┤  grading / advance steps
//!   └─ tick_interval                        └─ animation tasks
//!        └── SessionController ── EngineCommand ──>──┘
//! ```

use super::mode::{self, KeyAction};
use super::presenter::TuiPresenter;
use super::state::{Overlay, TuiState};
use super::widgets::{
    MainLayout, ai_text::AiTextWidget, header::HeaderWidget, help::HelpWidget,
    input::InputWidget, settings::SettingsWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, widgets::Clear};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use trivia_application::{
    ControllerError, GatewayError, SessionController, Settings, StartOutcome, UiEvent,
};

const FLASH_TTL: Duration = Duration::from_secs(5);

/// Main TUI application
pub struct TuiApp {
    controller: SessionController,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    presenter: TuiPresenter,
}

impl TuiApp {
    /// `ui_rx` must receive the events of the `ui_tx` the controller was built with.
    pub fn new(controller: SessionController, ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        Self {
            controller,
            ui_rx,
            presenter: TuiPresenter::new(),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal if anything panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        self.controller.stop();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new();
        state.speech_available = self.controller.speech_available();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        self.start_session(&mut state);

        loop {
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                    // Drain whatever else is queued before redrawing
                    while let Ok(ui_event) = self.ui_rx.try_recv() {
                        self.presenter.apply(&mut state, &ui_event);
                    }
                }

                _ = tick.tick() => {
                    state.expire_flash(FLASH_TTL);
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: crossterm::event::Event) {
        if let crossterm::event::Event::Key(key) = event {
            let action = mode::handle_key_event(state.overlay, state.answer.is_empty(), key);
            self.handle_action(state, action);
        }
        // Resize: the next draw picks up the new size
    }

    fn handle_action(&mut self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,

            KeyAction::Answer(key) => {
                if !self.controller.send_key(key) {
                    debug!("Key {:?} dropped, no game running", key);
                }
            }
            KeyAction::OpenSettings => {
                self.controller.stop();
                self.open_settings(state);
            }
            KeyAction::ReplaySpeech => {
                if !state.speech_available {
                    state.set_flash("No speech command available");
                } else if !self.controller.replay_speech() {
                    state.set_flash("No game running");
                }
            }
            KeyAction::Restart => self.start_session(state),
            KeyAction::ToggleHelp => state.toggle_help(),
            KeyAction::CloseHelp => state.overlay = Overlay::None,

            KeyAction::SettingsNextField => state.settings_form.focus_next(),
            KeyAction::SettingsPrevField => state.settings_form.focus_prev(),
            KeyAction::SettingsInput(c) => state.settings_form.input(c),
            KeyAction::SettingsBackspace => state.settings_form.backspace(),
            KeyAction::SettingsSave => self.save_settings(state),
            KeyAction::SettingsCancel => {
                state.overlay = Overlay::None;
                self.start_session(state);
            }
        }
    }

    fn current_settings(&self, state: &mut TuiState) -> Settings {
        match self.controller.settings() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Could not load settings: {}", e);
                state.set_flash(format!("Could not load settings: {}", e));
                Settings::default()
            }
        }
    }

    fn open_settings(&self, state: &mut TuiState) {
        let settings = self.current_settings(state);
        state.open_settings(&settings);
    }

    fn start_session(&mut self, state: &mut TuiState) {
        let outcome = self.controller.start();
        self.handle_start(state, outcome);
    }

    fn save_settings(&mut self, state: &mut TuiState) {
        let current = self.current_settings(state);
        let settings = match state.settings_form.apply_to(&current) {
            Ok(settings) => settings,
            Err(message) => {
                state.settings_form.error = Some(message);
                return;
            }
        };

        let outcome = self.controller.save_settings(&settings);
        if matches!(outcome, Ok(StartOutcome::SettingsRequired)) {
            state.settings_form.error =
                Some("Both an API token and a question set are required".to_string());
            return;
        }
        state.overlay = Overlay::None;
        self.handle_start(state, outcome);
    }

    fn handle_start(
        &self,
        state: &mut TuiState,
        outcome: Result<StartOutcome, ControllerError>,
    ) {
        match outcome {
            Ok(StartOutcome::Started { questions }) => {
                debug!("Game started with {} questions", questions);
            }
            Ok(StartOutcome::SettingsRequired) => {
                if state.overlay != Overlay::Settings {
                    self.open_settings(state);
                }
            }
            Err(ControllerError::Gateway(GatewayError::MissingToken)) => {
                self.open_settings(state);
            }
            Err(e) => {
                warn!("Could not start game: {}", e);
                state.set_flash(format!("Could not start game: {}", e));
            }
        }
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(AiTextWidget::new(state), layout.ai_text);
    frame.render_widget(InputWidget::new(state), layout.input);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    match state.overlay {
        Overlay::None => {}
        Overlay::Help => {
            let area = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(HelpWidget::new(state.speech_available), area);
        }
        Overlay::Settings => {
            let area = MainLayout::centered_overlay(70, 60, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(SettingsWidget::new(&state.settings_form), area);
        }
    }
}

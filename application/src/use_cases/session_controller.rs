//! Session controller use case
//!
//! Owns the lifecycle of [`TriviaEngine`] instances. Every game start reads
//! the settings afresh, builds a gateway for the stored token and spawns a
//! new engine; stopping drops the engine's inbox and aborts its task, which
//! cancels any in-flight grading request together with its animations.

use crate::config::{GameConfig, Settings};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::grading_gateway::{GatewayError, GradingGatewayFactory};
use crate::ports::settings_repository::{SettingsError, SettingsRepository};
use crate::ports::speech::{NoSpeech, SpeechPort};
use crate::ports::ui_event::UiEvent;
use crate::use_cases::trivia_engine::{EngineCommand, KeyInput, TriviaEngine};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Cannot create grader: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result of [`SessionController::start`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// An engine is running with this many questions
    Started { questions: usize },
    /// Token or question set missing; nothing was started
    SettingsRequired,
}

struct EngineHandle {
    commands: mpsc::UnboundedSender<EngineCommand>,
    task: JoinHandle<()>,
}

/// Starts, stops and feeds the active trivia engine.
pub struct SessionController {
    settings_repo: Arc<dyn SettingsRepository>,
    gateway_factory: Arc<dyn GradingGatewayFactory>,
    speech: Arc<dyn SpeechPort>,
    logger: Arc<dyn ConversationLogger>,
    config: GameConfig,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    active: Option<EngineHandle>,
}

impl SessionController {
    pub fn new(
        settings_repo: Arc<dyn SettingsRepository>,
        gateway_factory: Arc<dyn GradingGatewayFactory>,
        config: GameConfig,
        ui_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            settings_repo,
            gateway_factory,
            speech: Arc::new(NoSpeech),
            logger: Arc::new(NoConversationLogger),
            config,
            ui_tx,
            active: None,
        }
    }

    pub fn with_speech(mut self, speech: Arc<dyn SpeechPort>) -> Self {
        self.speech = speech;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|engine| !engine.task.is_finished())
    }

    pub fn speech_available(&self) -> bool {
        self.speech.is_available()
    }

    /// Current persisted settings
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        self.settings_repo.load()
    }

    /// Start a new game, replacing any running one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<StartOutcome, ControllerError> {
        self.teardown();

        let settings = self.settings_repo.load()?;
        if !settings.is_complete() {
            info!("Settings incomplete, asking the player for them");
            let _ = self.ui_tx.send(UiEvent::SettingsRequired);
            return Ok(StartOutcome::SettingsRequired);
        }

        let questions = match settings.questions() {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Ignoring invalid question set: {}", e);
                Vec::new()
            }
        };
        let count = questions.len();

        let gateway = self.gateway_factory.create(&settings.api_token)?;
        let auto_speak = settings.auto_speak && self.speech.is_available();
        let engine = TriviaEngine::new(questions, gateway, self.config.clone(), self.ui_tx.clone())
            .with_speech(Arc::clone(&self.speech), auto_speak)
            .with_conversation_logger(Arc::clone(&self.logger));

        let (commands, inbox) = mpsc::unbounded_channel();
        let task = tokio::spawn(engine.run(inbox));
        self.active = Some(EngineHandle { commands, task });

        debug!("Engine started (questions={}, auto_speak={})", count, auto_speak);
        Ok(StartOutcome::Started { questions: count })
    }

    /// Tear down the active engine, if any.
    pub fn stop(&mut self) {
        if self.teardown() {
            info!("Session stopped");
            let _ = self.ui_tx.send(UiEvent::SessionStopped);
        }
    }

    pub fn restart(&mut self) -> Result<StartOutcome, ControllerError> {
        self.stop();
        self.start()
    }

    /// Persist new settings and start over with them.
    pub fn save_settings(&mut self, settings: &Settings) -> Result<StartOutcome, ControllerError> {
        self.settings_repo.save(settings)?;
        info!("Settings saved");
        self.restart()
    }

    /// Forward a key to the active engine. Returns `false` when no engine
    /// is running.
    pub fn send_key(&self, key: KeyInput) -> bool {
        self.send(EngineCommand::Key(key))
    }

    pub fn replay_speech(&self) -> bool {
        self.send(EngineCommand::ReplaySpeech)
    }

    fn send(&self, command: EngineCommand) -> bool {
        match &self.active {
            Some(engine) => engine.commands.send(command).is_ok(),
            None => false,
        }
    }

    fn teardown(&mut self) -> bool {
        match self.active.take() {
            Some(engine) => {
                drop(engine.commands);
                engine.task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.teardown();
    }
}

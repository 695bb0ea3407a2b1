//! Application layer for trivia-grader
//!
//! This crate contains the conversation engine, the session controller,
//! port definitions and application configuration.
//! It depends only on the domain layer.

pub mod animation;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use animation::{TextAnimator, TypingHandle};
pub use config::{AnimationTimings, GameConfig, Settings};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    grading_gateway::{GatewayError, GradingGateway, GradingGatewayFactory},
    settings_repository::{InMemorySettingsRepository, SettingsError, SettingsRepository},
    speech::{NoSpeech, SpeechError, SpeechPort},
    ui_event::UiEvent,
};
pub use use_cases::session_controller::{ControllerError, SessionController, StartOutcome};
pub use use_cases::trivia_engine::{EngineCommand, KeyInput, TriviaEngine};

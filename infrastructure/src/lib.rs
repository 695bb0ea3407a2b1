//! Infrastructure layer for trivia-grader
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod settings;
pub mod speech;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGameConfig, FileLoggingConfig, FileMessagesConfig,
    FileProviderConfig, FileSpeechConfig, TOKEN_ENV,
};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiConfig, OpenAiError, OpenAiGatewayFactory, OpenAiGradingGateway};
pub use settings::JsonSettingsRepository;
pub use speech::CommandSpeech;

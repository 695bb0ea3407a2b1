//! Chat-completion adapter for the grading port
//!
//! Speaks the OpenAI `/chat/completions` protocol, which most hosted and
//! local model servers also accept.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::OpenAiError;
pub use gateway::{OpenAiConfig, OpenAiGatewayFactory, OpenAiGradingGateway};

//! Grading gateway port
//!
//! Defines the interface for sending a grading conversation to a
//! chat-completion provider.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use trivia_domain::Message;

/// Errors that can occur during a grading round-trip
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Missing API token")]
    MissingToken,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for grading answers
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GradingGateway: Send + Sync {
    /// Send the whole conversation and return the assistant's reply text.
    async fn grade(&self, messages: &[Message]) -> Result<String, GatewayError>;
}

/// Builds a gateway for an API token.
///
/// The token lives in the player's settings and can change at runtime, so
/// the session controller asks for a fresh gateway on every game start.
pub trait GradingGatewayFactory: Send + Sync {
    fn create(&self, api_token: &str) -> Result<Arc<dyn GradingGateway>, GatewayError>;
}

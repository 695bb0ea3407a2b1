//! Error types for the chat-completion adapter

use thiserror::Error;
use trivia_application::GatewayError;

/// Result type alias for chat-completion operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to a chat-completion endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Response contained no message")]
    EmptyResponse,

    #[error("API token is empty")]
    MissingToken,
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::ParseError { error, .. } => GatewayError::MalformedResponse(error),
            OpenAiError::ApiError { status, message } => {
                GatewayError::RequestFailed(format!("HTTP {}: {}", status, message))
            }
            OpenAiError::EmptyResponse => GatewayError::EmptyResponse,
            OpenAiError::MissingToken => GatewayError::MissingToken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_request_failed() {
        let err: GatewayError = OpenAiError::ApiError {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Request failed: HTTP 401: Incorrect API key provided"
        );
    }

    #[test]
    fn test_parse_error_keeps_reason_only() {
        let err: GatewayError = OpenAiError::ParseError {
            error: "missing field `choices`".to_string(),
            raw: "{}".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.contains("choices")));
    }
}

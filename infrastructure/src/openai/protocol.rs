//! Chat-completion wire format
//!
//! Only the fields the grader needs are modelled: the request carries the
//! model and the conversation, the reply is `choices[0].message.content`.

use super::error::{OpenAiError, Result};
use serde::{Deserialize, Serialize};
use trivia_domain::Message;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the first choice's text from a successful response body.
pub fn parse_reply(body: &str) -> Result<String> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| OpenAiError::ParseError {
            error: e.to_string(),
            raw: body.to_string(),
        })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(OpenAiError::EmptyResponse)
}

/// Build an error for a non-success status, using the API's own message
/// when the body carries one.
pub fn parse_error(status: u16, body: &str) -> OpenAiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().chars().take(200).collect());
    OpenAiError::ApiError { status, message }
}

//! Grading gateway over an OpenAI-compatible chat-completion API

use super::error::{OpenAiError, Result};
use super::protocol::{ChatRequest, parse_error, parse_reply};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use trivia_application::{GatewayError, GradingGateway, GradingGatewayFactory};
use trivia_domain::Message;

/// Endpoint settings shared by every gateway the factory builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Gateway bound to one API token
pub struct OpenAiGradingGateway {
    client: Client,
    config: OpenAiConfig,
    api_token: String,
}

impl OpenAiGradingGateway {
    pub fn new(config: OpenAiConfig, api_token: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(OpenAiError::MissingToken);
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            api_token,
        })
    }

    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let url = self.config.completions_url();
        debug!(
            "POST {} (model={}, messages={})",
            url,
            self.config.model,
            messages.len()
        );

        let payload = ChatRequest {
            model: &self.config.model,
            messages,
        };
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &body));
        }

        parse_reply(&body)
    }
}

#[async_trait]
impl GradingGateway for OpenAiGradingGateway {
    async fn grade(&self, messages: &[Message]) -> std::result::Result<String, GatewayError> {
        Ok(self.complete(messages).await?)
    }
}

/// Builds an [`OpenAiGradingGateway`] per API token
pub struct OpenAiGatewayFactory {
    config: OpenAiConfig,
}

impl OpenAiGatewayFactory {
    pub fn new(config: OpenAiConfig) -> Self {
        Self { config }
    }
}

impl GradingGatewayFactory for OpenAiGatewayFactory {
    fn create(
        &self,
        api_token: &str,
    ) -> std::result::Result<Arc<dyn GradingGateway>, GatewayError> {
        let gateway = OpenAiGradingGateway::new(self.config.clone(), api_token)?;
        Ok(Arc::new(gateway))
    }
}

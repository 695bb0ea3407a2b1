//! Grading provider configuration from TOML (`[provider]` section)

use crate::openai::OpenAiConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use trivia_domain::ConfigIssue;

/// Environment variable consulted when the stored API token is empty
pub const TOKEN_ENV: &str = "TRIVIA_API_TOKEN";

/// OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Model used for grading.
    pub model: String,
    /// Additional environment variable for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn to_openai_config(&self) -> OpenAiConfig {
        OpenAiConfig {
            base_url: self.base_url.trim().to_string(),
            model: self.model.trim().to_string(),
            timeout: self.timeout(),
        }
    }

    /// Environment variables checked, in order, for a fallback token.
    pub fn token_env_vars(&self) -> Vec<String> {
        let mut vars = vec![TOKEN_ENV.to_string()];
        let extra = self.api_key_env.trim();
        if !extra.is_empty() && extra != TOKEN_ENV {
            vars.push(extra.to_string());
        }
        vars
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::empty_field("provider.base_url"));
        }
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::empty_field("provider.model"));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::zero_interval("provider.timeout_secs"));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_env_vars() {
        let config = FileProviderConfig::default();
        assert_eq!(config.token_env_vars(), vec!["TRIVIA_API_TOKEN", "OPENAI_API_KEY"]);

        let config = FileProviderConfig {
            api_key_env: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.token_env_vars(), vec!["TRIVIA_API_TOKEN"]);
    }

    #[test]
    fn test_blank_model_is_reported() {
        let config = FileProviderConfig {
            model: String::new(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}

use crate::config::Config;
use crate::error::{ReviewAgentError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the API key. The key is never read from
/// config files.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Blocking client for the OpenAI chat-completions API.
///
/// Every review request goes through [`OpenAiClient::chat`], so error
/// handling and request shape live in one place.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_completion_tokens: u32,
    http: reqwest::blocking::Client,
}

impl OpenAiClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_completion_tokens: u32,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            temperature,
            max_completion_tokens,
            http,
        })
    }

    /// Build a client from the merged configuration. The key comes from the
    /// environment only.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| ReviewAgentError::MissingApiKey)?;
        if api_key.is_empty() {
            return Err(ReviewAgentError::MissingApiKey);
        }

        Self::new(
            config.api.base_url.clone(),
            api_key,
            config.model.name.clone(),
            config.model.temperature,
            config.model.completion_tokens,
        )
    }

    /// Verify the API key works with a models-list request
    pub fn validate_key(&self) -> Result<()> {
        let url = format!("{}/v1/models", self.base_url);
        let resp = self.http.get(&url).bearer_auth(&self.api_key).send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ReviewAgentError::ApiAuth(
                "authentication failed for the models request".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(ReviewAgentError::Api(format!(
                "models request failed with status {}",
                status.as_u16()
            )));
        }

        Ok(())
    }

    /// Single entry point for chat completions
    pub fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_completion_tokens,
        };

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ReviewAgentError::ApiAuth(
                "authentication failed for the completion request".to_string(),
            ));
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ReviewAgentError::Api(format!(
                "completion failed with status {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let parsed: CompletionResponse = resp.json()?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ReviewAgentError::Api("no completion choice in response".to_string()))?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let message = ChatMessage::system("be brief");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be brief");

        let message = ChatMessage::user("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_request_body_shape() {
        let messages = [ChatMessage::user("hi")];
        let request = CompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: 0.2,
            max_tokens: 1500,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 1500);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = OpenAiClient::new(
            "http://localhost:9999/".to_string(),
            "key".to_string(),
            "gpt-4o".to_string(),
            0.2,
            1500,
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_config_requires_key() {
        let original = std::env::var(API_KEY_VAR).ok();
        std::env::remove_var(API_KEY_VAR);

        let result = OpenAiClient::from_config(&Config::default());

        if let Some(key) = original {
            std::env::set_var(API_KEY_VAR, key);
        }

        assert!(matches!(result, Err(ReviewAgentError::MissingApiKey)));
    }
}

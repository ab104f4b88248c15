//! Client for OpenAI-compatible chat completion APIs (Groq by default).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AssistantConfig;
use crate::constants::{http::USER_AGENT, limits::ERROR_BODY_PREVIEW};
use crate::models::chat::ChatMessage;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API key not set: export {0}")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Completion API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Completion API returned no reply")]
    EmptyReply,
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the conversation and returns the assistant's reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl CompletionResponse {
    fn into_reply(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(CompletionError::EmptyReply)
    }
}

#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiCompatibleClient {
    /// Builds a client from the `[assistant]` config section, reading the API
    /// key from the environment variable it names.
    ///
    /// # Errors
    /// Returns [`CompletionError::MissingApiKey`] when the variable is unset or
    /// empty.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CompletionError::MissingApiKey(config.api_key_env.clone()))?;

        Self::new(
            &config.base_url,
            &config.model,
            api_key,
            Duration::from_secs(config.request_timeout_seconds),
        )
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url),
            model: model.to_string(),
            api_key,
        })
    }

    fn endpoint_for(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        debug!(
            model = %self.model,
            messages = messages.len(),
            "Requesting chat completion"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            warn!(status = status.as_u16(), "Chat completion request failed");
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: CompletionResponse = response.json().await?;
        response.into_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            OpenAiCompatibleClient::endpoint_for("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_reply_is_first_choice() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "The WiFi is CanyonWifi."}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_reply().unwrap(), "The WiFi is CanyonWifi.");
    }

    #[test]
    fn test_missing_or_blank_content_is_empty_reply() {
        let response: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            response.into_reply(),
            Err(CompletionError::EmptyReply)
        ));

        let response: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "  "}}]}"#).unwrap();
        assert!(matches!(
            response.into_reply(),
            Err(CompletionError::EmptyReply)
        ));
    }

    #[test]
    fn test_request_serializes_roles_lowercase() {
        let messages = [ChatMessage::system("rules"), ChatMessage::user("hi")];
        let body = serde_json::to_value(CompletionRequest {
            model: "m",
            messages: &messages,
        })
        .unwrap();
        assert_eq!(body["model"], "m");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_missing_api_key() {
        let config = AssistantConfig {
            api_key_env: format!("CONCIERGE_TEST_KEY_{}", uuid::Uuid::new_v4().simple()),
            ..AssistantConfig::default()
        };
        let err = OpenAiCompatibleClient::from_config(&config).err().unwrap();
        assert!(matches!(err, CompletionError::MissingApiKey(name) if name == config.api_key_env));
    }
}

//! OpenAI-compatible reasoning backend.
//!
//! Works with DeepSeek-reasoner and any endpoint exposing the
//! `/chat/completions` contract with a `reasoning_content` field on the
//! message. The request timeout lives on the HTTP client; a timed-out
//! call surfaces as an error and the caller decides whether that is
//! fatal (planner) or a degraded stance (panel).

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ModelReply, ModelRequest, ModelTimeout, ReasoningBackend};
use crate::config::ModelConfig;

/// Env var holding the API key. Never read from config files.
const API_KEY_ENV: &str = "LITHOPANEL_API_KEY";

pub struct OpenAiCompatBackend {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatBackend {
    /// Build a backend from the model section of the run config.
    ///
    /// Fails when `$LITHOPANEL_API_KEY` is unset or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .with_context(|| format!("{API_KEY_ENV} environment variable not set"))?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            client,
        })
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    reasoning_content: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ReasoningBackend for OpenAiCompatBackend {
    async fn generate(&self, request: ModelRequest) -> Result<ModelReply> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(serde_json::json!({"role": "system", "content": system}));
        }
        messages.push(serde_json::json!({"role": "user", "content": request.prompt}));

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        });
        if request.json_mode {
            body["response_format"] = serde_json::json!({"type": "json_object"});
        }

        debug!(
            model = %self.model,
            json_mode = request.json_mode,
            prompt_len = request.prompt.len(),
            "Sending reasoning-model request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    anyhow::Error::new(err).context(ModelTimeout)
                } else {
                    anyhow::Error::new(err).context("Reasoning-model request failed")
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reasoning-model endpoint returned {status}: {body}");
        }

        let parsed: ApiResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                anyhow::Error::new(err).context(ModelTimeout)
            } else {
                anyhow::Error::new(err).context("Failed to decode reasoning-model response")
            }
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("Reasoning-model response contained no choices")?;

        Ok(ModelReply {
            rationale: choice.message.reasoning_content.unwrap_or_default(),
            answer: choice.message.content.unwrap_or_default(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "openai-compat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decoding_with_reasoning() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "reasoning_content": "thinking...",
                    "content": "{\"answer\": []}"
                }
            }]
        }"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        let message = &parsed.choices[0].message;
        assert_eq!(message.reasoning_content.as_deref(), Some("thinking..."));
        assert_eq!(message.content.as_deref(), Some("{\"answer\": []}"));
    }

    #[test]
    fn test_response_decoding_without_reasoning() {
        let raw = r#"{"choices": [{"message": {"content": "plain"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.reasoning_content.is_none());
    }
}

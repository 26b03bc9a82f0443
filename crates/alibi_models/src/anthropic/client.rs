//! Anthropic API client.

use super::types::{MessagesRequest, MessagesResponse, WireMessage};
use crate::classify::{preview, upstream_error};
use alibi_error::{
    AlibiResult, GenerationError, GenerationErrorKind, InterpretError, InterpretErrorKind,
};
use alibi_interface::ExcuseDriver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2000;

/// Anthropic messages API client for excuse text generation.
///
/// Performs exactly one attempt per call with a hard wall-clock budget: when
/// the budget elapses the in-flight call is dropped (aborting the request)
/// and a timeout failure is returned instead of waiting.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-sonnet-4-5-20250929")
    /// * `timeout` - Wall-clock budget for one call
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
        }
    }

    /// Sends a prompt and returns the model's text payload.
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: &str) -> AlibiResult<String> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![WireMessage::user(prompt)],
        };

        let call = async {
            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to send request to Anthropic API");
                    GenerationError::new(GenerationErrorKind::Network(e.to_string()))
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(
                    status = status.as_u16(),
                    body_preview = %preview(&body),
                    "Anthropic API returned error"
                );
                return Err(upstream_error(status.as_u16(), &body));
            }

            response.json::<MessagesResponse>().await.map_err(|e| {
                error!(error = %e, "Failed to deserialize Anthropic response");
                GenerationError::new(GenerationErrorKind::Network(e.to_string()))
            })
        };

        let response = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                let secs = self.timeout.as_secs();
                error!(timeout_secs = secs, "Anthropic call aborted on timeout");
                return Err(GenerationError::new(GenerationErrorKind::Timeout(secs)).into());
            }
        };

        let text = response
            .content
            .iter()
            .find(|block| block.kind == "text" && !block.text.is_empty())
            .map(|block| block.text.clone())
            .ok_or_else(|| {
                InterpretError::new(InterpretErrorKind::Schema(
                    "response contained no text content".to_string(),
                ))
            })?;

        debug!(text_len = text.len(), "Received text from Anthropic");
        Ok(text)
    }
}

#[async_trait]
impl ExcuseDriver for AnthropicClient {
    async fn generate(&self, prompt: &str) -> AlibiResult<String> {
        self.generate_text(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

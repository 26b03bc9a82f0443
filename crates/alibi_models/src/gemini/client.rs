//! Gemini image generation client.

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig, Part,
};
use crate::classify::{preview, upstream_error};
use crate::interpret::interpret_image;
use alibi_core::{GeneratedImage, Headshot};
use alibi_error::{AlibiResult, GenerationError, GenerationErrorKind};
use alibi_interface::ImageDriver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const ASPECT_RATIO: &str = "16:9";

/// Gemini generateContent client for excuse image generation.
///
/// Image generation is slower than text, so this client carries a longer
/// wall-clock budget. Like the text client it performs exactly one attempt;
/// on timeout the in-flight call is dropped and a timeout failure returned.
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiImageClient {
    /// Creates a new Gemini image client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `model` - Model identifier (e.g., "gemini-2.5-flash-image")
    /// * `timeout` - Wall-clock budget for one call
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        debug!("Creating new Gemini image client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }

    /// Sends a prompt (and optional headshot) and returns the generated image.
    #[instrument(
        skip(self, prompt, headshot),
        fields(model = %self.model, has_headshot = headshot.is_some()),
    )]
    async fn generate_image(
        &self,
        prompt: &str,
        headshot: Option<&Headshot>,
    ) -> AlibiResult<GeneratedImage> {
        // The headshot part must precede the text prompt.
        let mut parts = Vec::with_capacity(2);
        if let Some(headshot) = headshot {
            parts.push(Part::inline(&headshot.mime_type, &headshot.base64));
        }
        parts.push(Part::text(prompt));

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["Image"],
                image_config: ImageConfig {
                    aspect_ratio: ASPECT_RATIO,
                },
            },
        };

        let call = async {
            let response = self
                .client
                .post(self.endpoint())
                .header("x-goog-api-key", &self.api_key)
                .header("content-type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to send request to Gemini API");
                    GenerationError::new(GenerationErrorKind::Network(e.to_string()))
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(
                    status = status.as_u16(),
                    body_preview = %preview(&body),
                    "Gemini API returned error"
                );
                return Err(upstream_error(status.as_u16(), &body));
            }

            response.json::<GenerateContentResponse>().await.map_err(|e| {
                error!(error = %e, "Failed to deserialize Gemini response");
                GenerationError::new(GenerationErrorKind::Network(e.to_string()))
            })
        };

        let response = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                let secs = self.timeout.as_secs();
                error!(timeout_secs = secs, "Gemini call aborted on timeout");
                return Err(GenerationError::new(GenerationErrorKind::Timeout(secs)).into());
            }
        };

        let image = interpret_image(response)?;
        debug!(
            mime_type = %image.mime_type,
            data_len = image.base64.len(),
            "Received image from Gemini"
        );
        Ok(image)
    }
}

#[async_trait]
impl ImageDriver for GeminiImageClient {
    async fn generate(
        &self,
        prompt: &str,
        headshot: Option<&Headshot>,
    ) -> AlibiResult<GeneratedImage> {
        self.generate_image(prompt, headshot).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

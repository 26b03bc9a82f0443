//! Driver traits for upstream generation services.

use alibi_core::{GeneratedImage, Headshot};
use alibi_error::AlibiResult;
use async_trait::async_trait;

/// Text generation backend for excuse pairs.
///
/// Implementations perform exactly one bounded, cancellable call per
/// invocation and return the model's raw text payload. Interpretation of
/// that payload (fence stripping, parsing, shape checks) happens upstream
/// of this trait.
#[async_trait]
pub trait ExcuseDriver: Send + Sync {
    /// Send the composed prompt and return the model's text payload.
    async fn generate(&self, prompt: &str) -> AlibiResult<String>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-5").
    fn model_name(&self) -> &str;
}

/// Image generation backend for excuse illustrations.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Send the composed prompt (and optional headshot reference) and return
    /// the generated image.
    async fn generate(
        &self,
        prompt: &str,
        headshot: Option<&Headshot>,
    ) -> AlibiResult<GeneratedImage>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash-image").
    fn model_name(&self) -> &str;
}

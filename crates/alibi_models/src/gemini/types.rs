//! Wire types for the Gemini generateContent API.
//!
//! Request fields use the snake_case spellings the API accepts for inline
//! data; response fields arrive camelCase.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1beta/models/<model>:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// One content entry holding the request parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

/// A request part: inline image data or prompt text.
///
/// When a headshot is supplied its part must precede the text prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// A text prompt part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            inline_data: None,
            text: Some(text.into()),
        }
    }

    /// An inline image part.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            text: None,
        }
    }
}

/// Base64 image data attached to a request part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Generation settings: image-only output at a fixed aspect ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<&'static str>,
    #[serde(rename = "imageConfig")]
    pub image_config: ImageConfig,
}

/// Image output settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: &'static str,
}

/// Response body for generateContent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generation candidate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Candidate {
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
    pub content: Option<CandidateContent>,
}

/// Candidate content holding the response parts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part; only inline image data is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ResponsePart {
    #[serde(rename = "inlineData")]
    pub inline_data: Option<ResponseInlineData>,
}

/// Inline image data in a response part.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ResponseInlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    pub data: Option<String>,
}

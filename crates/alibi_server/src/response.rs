//! Error-to-response mapping.
//!
//! The closed failure taxonomy maps here to an HTTP status and a
//! user-presentable message. Internal diagnostic detail (upstream bodies,
//! raw model output, source locations) is logged server-side and never
//! echoed to the caller.

use alibi_error::{AlibiError, AlibiErrorKind, GenerationErrorKind, InterpretErrorKind};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use tracing::error;

const CONFIG_ERROR_MESSAGE: &str = "Server configuration error. Please contact support.";

/// Body of a successful image response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResponse {
    /// The generated image as a `data:` URI
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// A classified request failure, ready to serialize as `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The 429 answer for a client that exhausted its window.
    pub fn rate_limited() -> Self {
        Self::new(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests. Please try again in a few moments.",
        )
    }

    /// The HTTP status this failure maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The user-presentable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AlibiError> for ApiError {
    fn from(err: AlibiError) -> Self {
        // Full internal detail stays in the server log.
        error!(error = %err, "Request failed");

        match err.kind() {
            AlibiErrorKind::Validation(e) => {
                Self::new(StatusCode::BAD_REQUEST, e.kind.to_string())
            }
            AlibiErrorKind::Config(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, CONFIG_ERROR_MESSAGE)
            }
            AlibiErrorKind::Generation(e) => match &e.kind {
                GenerationErrorKind::Timeout(_) => Self::new(
                    StatusCode::GATEWAY_TIMEOUT,
                    "Request timed out. Please try again.",
                ),
                GenerationErrorKind::UpstreamStatus { status: 400, .. } => Self::new(
                    StatusCode::BAD_REQUEST,
                    "Invalid request to the generation service. Please try a different prompt.",
                ),
                // Never leak whether the credential was wrong or missing.
                GenerationErrorKind::UpstreamStatus {
                    status: 401 | 403, ..
                } => Self::new(StatusCode::INTERNAL_SERVER_ERROR, CONFIG_ERROR_MESSAGE),
                GenerationErrorKind::UpstreamStatus { status: 429, .. } => Self::new(
                    StatusCode::TOO_MANY_REQUESTS,
                    "Rate limit exceeded. Please try again in a few moments.",
                ),
                GenerationErrorKind::UpstreamStatus { .. } => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The generation service failed. Please try again.",
                ),
                GenerationErrorKind::Network(_) => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again.",
                ),
            },
            AlibiErrorKind::Interpret(e) => match &e.kind {
                InterpretErrorKind::Parse(_) | InterpretErrorKind::Schema(_) => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process the generated excuses. Please try again.",
                ),
                InterpretErrorKind::SafetyBlocked => Self::new(
                    StatusCode::BAD_REQUEST,
                    "Image generation blocked by safety filters. Please try a different \
                     prompt or image.",
                ),
                InterpretErrorKind::ContentRestricted => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Image generation failed due to content restrictions. Please try \
                     without uploading a photo, or try a different excuse.",
                ),
                InterpretErrorKind::Blocked(_) => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate image. Please try again with a different prompt.",
                ),
                InterpretErrorKind::NoCandidates | InterpretErrorKind::NoParts => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate image. The service returned no content. Please \
                     try again.",
                ),
                InterpretErrorKind::NoImageData => Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate image. The model may not support image generation.",
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alibi_error::{
        GenerationError, InterpretError, ValidationError, ValidationErrorKind,
    };

    #[test]
    fn validation_maps_to_400_with_its_message() {
        let err: AlibiError = ValidationError::new(ValidationErrorKind::ScenarioTooLong).into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert!(api.message().contains("1000"));
    }

    #[test]
    fn timeout_maps_to_504() {
        let err: AlibiError = GenerationError::new(GenerationErrorKind::Timeout(30)).into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn auth_failures_read_as_configuration_errors() {
        for status in [401, 403] {
            let err: AlibiError = GenerationError::new(GenerationErrorKind::UpstreamStatus {
                status,
                message: "key rejected".to_string(),
            })
            .into();
            let api = ApiError::from(err);
            assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api.message(), CONFIG_ERROR_MESSAGE);
            assert!(!api.message().contains("key"));
        }
    }

    #[test]
    fn upstream_rate_limit_passes_through_as_429() {
        let err: AlibiError = GenerationError::new(GenerationErrorKind::UpstreamStatus {
            status: 429,
            message: String::new(),
        })
        .into();
        assert_eq!(ApiError::from(err).status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn safety_block_is_a_caller_facing_400() {
        let err: AlibiError = InterpretError::new(InterpretErrorKind::SafetyBlocked).into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert!(api.message().contains("safety"));
    }

    #[test]
    fn parse_failures_never_echo_model_output() {
        let err: AlibiError = InterpretError::new(InterpretErrorKind::Parse(
            "unexpected token at line 1".to_string(),
        ))
        .into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.message().contains("token"));
    }
}

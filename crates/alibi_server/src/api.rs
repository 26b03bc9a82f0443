//! HTTP routes and the request pipelines behind them.

use crate::response::{ApiError, ImageResponse};
use crate::state::AppState;
use crate::validate::{validate_excuse, validate_image};
use alibi_core::ExcusePair;
use alibi_error::AlibiError;
use alibi_models::parse_excuse_pair;
use alibi_prompt::{compose_excuse, compose_image};
use alibi_rate_limit::client_key;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use chrono::{Datelike, Local};
use serde_json::{Value, json};
use std::time::Instant;
use tracing::info;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate-excuses", post(generate_excuses))
        .route("/api/generate-image", post(generate_image))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Handler for `POST /api/generate-excuses`.
async fn generate_excuses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let started = Instant::now();
    let client = request_client_key(&headers);

    match excuse_pipeline(&state, &client, &body).await {
        Ok(pair) => {
            info!(
                endpoint = "/api/generate-excuses",
                client = %client,
                status = "success",
                comedic_style = %pair.comedic_style,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Excuses generated"
            );
            (StatusCode::OK, Json(pair)).into_response()
        }
        Err(err) => {
            info!(
                endpoint = "/api/generate-excuses",
                client = %client,
                status = "error",
                http_status = err.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Excuse request failed"
            );
            err.into_response()
        }
    }
}

/// Handler for `POST /api/generate-image`.
async fn generate_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let started = Instant::now();
    let client = request_client_key(&headers);

    match image_pipeline(&state, &client, &body).await {
        Ok(image) => {
            info!(
                endpoint = "/api/generate-image",
                client = %client,
                status = "success",
                image_bytes = image.image_url.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Image generated"
            );
            (StatusCode::OK, Json(image)).into_response()
        }
        Err(err) => {
            info!(
                endpoint = "/api/generate-image",
                client = %client,
                status = "error",
                http_status = err.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Image request failed"
            );
            err.into_response()
        }
    }
}

/// The excuse pipeline: rate limit, validate, check credentials, compose,
/// call the text service, interpret.
///
/// Limited and invalid requests return before any network call; every other
/// failure is classified into the response taxonomy, so nothing here can
/// take the process down.
pub async fn excuse_pipeline(
    state: &AppState,
    client: &str,
    body: &Value,
) -> Result<ExcusePair, ApiError> {
    if state.excuse_limiter.check(client).is_limited() {
        return Err(ApiError::rate_limited());
    }

    let today = Local::now();
    let (month, day) = (today.month(), today.day());

    let request = validate_excuse(body, month, day).map_err(AlibiError::from)?;
    let driver = state.excuse_driver()?;

    // Style resolution and prompt assembly happen before the await so the
    // rng guard never crosses a suspension point.
    let composed = {
        let mut rng = state.rng.lock().unwrap();
        compose_excuse(&request, &mut *rng, month, day)
    };

    let raw = driver.generate(&composed.prompt).await?;
    let pair = parse_excuse_pair(&raw, composed.style)?;
    Ok(pair)
}

/// The image pipeline: rate limit, validate (headshot constraints included),
/// check credentials, compose, call the image service.
pub async fn image_pipeline(
    state: &AppState,
    client: &str,
    body: &Value,
) -> Result<ImageResponse, ApiError> {
    if state.image_limiter.check(client).is_limited() {
        return Err(ApiError::rate_limited());
    }

    let request = validate_image(body).map_err(AlibiError::from)?;
    let driver = state.image_driver()?;

    let prompt = compose_image(
        &request.excuse_text,
        request.comedic_style,
        request.headshot.is_some(),
    );

    let image = driver.generate(&prompt, request.headshot.as_ref()).await?;
    Ok(ImageResponse {
        image_url: image.data_uri(),
    })
}

/// Rate limit key for a request, from proxy headers.
fn request_client_key(headers: &HeaderMap) -> String {
    let real_ip = headers.get("x-real-ip").and_then(|v| v.to_str().ok());
    let forwarded = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok());
    client_key(real_ip, forwarded)
}

//! End-to-end pipeline tests with mock drivers.

mod test_utils;

use alibi_core::ComedicStyle;
use alibi_error::GenerationErrorKind;
use alibi_interface::{ExcuseDriver, ImageDriver};
use alibi_rate_limit::LimitConfig;
use alibi_server::{AppState, excuse_pipeline, image_pipeline};
use axum::http::StatusCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::Arc;
use test_utils::{MockExcuseDriver, MockImageDriver};

const WELL_FORMED_PAYLOAD: &str = r#"{
    "excuse1": {"title": "Traffic Delay", "text": "I got stuck behind an accident."},
    "excuse2": {"title": "The Swan Incident", "text": "A swan commandeered my bicycle."}
}"#;

fn state_with(
    excuse: Option<Arc<MockExcuseDriver>>,
    image: Option<Arc<MockImageDriver>>,
    excuse_max: u32,
) -> AppState {
    AppState::new(
        excuse.map(|driver| driver as Arc<dyn ExcuseDriver>),
        image.map(|driver| driver as Arc<dyn ImageDriver>),
        LimitConfig::per_minute(excuse_max),
        LimitConfig::per_minute(10),
        StdRng::seed_from_u64(42),
    )
}

#[tokio::test]
async fn generates_excuse_pair_for_minimal_request() {
    let driver = Arc::new(MockExcuseDriver::new_success(WELL_FORMED_PAYLOAD));
    let state = state_with(Some(driver.clone()), None, 20);
    let body = json!({"scenario": "I missed the train", "audience": "My manager"});

    let pair = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap();
    assert!(!pair.excuse1.text.is_empty());
    assert!(!pair.excuse2.text.is_empty());
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn explicit_style_is_returned_deterministically() {
    let driver = Arc::new(MockExcuseDriver::new_success(WELL_FORMED_PAYLOAD));
    let state = state_with(Some(driver), None, 200);
    let body = json!({
        "scenario": "I missed the train", "audience": "My manager",
        "customOptions": {"style": "deadpan"}
    });

    for _ in 0..5 {
        let pair = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap();
        assert_eq!(pair.comedic_style, ComedicStyle::Deadpan);
    }
}

#[tokio::test]
async fn surprise_selection_varies_across_requests() {
    let driver = Arc::new(MockExcuseDriver::new_success(WELL_FORMED_PAYLOAD));
    let state = state_with(Some(driver), None, 200);
    let body = json!({"scenario": "I missed the train", "audience": "My manager"});

    let mut seen = std::collections::HashSet::new();
    for _ in 0..30 {
        let pair = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap();
        seen.insert(pair.comedic_style);
    }
    assert!(seen.len() > 1, "expected multiple styles over 30 draws");
}

#[tokio::test]
async fn requests_21_through_25_are_limited() {
    let driver = Arc::new(MockExcuseDriver::new_success(WELL_FORMED_PAYLOAD));
    let state = state_with(Some(driver.clone()), None, 20);
    let body = json!({"scenario": "I missed the train", "audience": "My manager"});

    for n in 1..=25 {
        let result = excuse_pipeline(&state, "203.0.113.7", &body).await;
        if n <= 20 {
            assert!(result.is_ok(), "request {n} should pass");
        } else {
            let err = result.unwrap_err();
            assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS, "request {n}");
        }
    }

    // Limited requests never reached the upstream driver.
    assert_eq!(driver.call_count(), 20);
}

#[tokio::test]
async fn empty_scenario_is_rejected_before_any_upstream_call() {
    let driver = Arc::new(MockExcuseDriver::new_success(WELL_FORMED_PAYLOAD));
    let state = state_with(Some(driver.clone()), None, 20);
    let body = json!({"scenario": "", "audience": "My date"});

    let err = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(err.message().contains("scenario"));
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn upstream_timeout_maps_to_504() {
    let driver = Arc::new(MockExcuseDriver::new_error(GenerationErrorKind::Timeout(30)));
    let state = state_with(Some(driver), None, 20);
    let body = json!({"scenario": "late", "audience": "My manager"});

    let err = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn malformed_model_payload_is_a_500() {
    let driver = Arc::new(MockExcuseDriver::new_success("definitely not json"));
    let state = state_with(Some(driver), None, 20);
    let body = json!({"scenario": "late", "audience": "My manager"});

    let err = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!err.message().contains("json"));
}

#[tokio::test]
async fn fenced_model_payload_still_parses() {
    let fenced = format!("```json\n{WELL_FORMED_PAYLOAD}\n```");
    let driver = Arc::new(MockExcuseDriver::new_success(fenced));
    let state = state_with(Some(driver), None, 20);
    let body = json!({"scenario": "late", "audience": "My manager"});

    let pair = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap();
    assert_eq!(pair.excuse2.title, "The Swan Incident");
}

#[tokio::test]
async fn missing_credentials_are_a_configuration_failure() {
    let state = state_with(None, None, 20);
    let body = json!({"scenario": "late", "audience": "My manager"});

    let err = excuse_pipeline(&state, "203.0.113.7", &body).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.message().contains("configuration"));
}

#[tokio::test]
async fn image_request_returns_a_data_uri() {
    let driver = Arc::new(MockImageDriver::new_success("aGVsbG8="));
    let state = state_with(None, Some(driver.clone()), 20);
    let body = json!({"excuseText": "A swan took my bicycle", "comedicStyle": "Deadpan"});

    let response = image_pipeline(&state, "203.0.113.7", &body).await.unwrap();
    assert_eq!(response.image_url, "data:image/png;base64,aGVsbG8=");
    assert!(!driver.saw_headshot());
}

#[tokio::test]
async fn headshot_reaches_the_image_driver() {
    let driver = Arc::new(MockImageDriver::new_success("aGVsbG8="));
    let state = state_with(None, Some(driver.clone()), 20);
    let body = json!({
        "excuseText": "A swan took my bicycle", "comedicStyle": "Deadpan",
        "headshotBase64": "aGVsbG8=", "headshotMimeType": "image/jpeg"
    });

    image_pipeline(&state, "203.0.113.7", &body).await.unwrap();
    assert!(driver.saw_headshot());
}

#[tokio::test]
async fn gif_headshot_is_rejected_before_any_upstream_call() {
    let driver = Arc::new(MockImageDriver::new_success("aGVsbG8="));
    let state = state_with(None, Some(driver.clone()), 20);
    let body = json!({
        "excuseText": "A swan took my bicycle", "comedicStyle": "Deadpan",
        "headshotBase64": "aGVsbG8=", "headshotMimeType": "image/gif"
    });

    let err = image_pipeline(&state, "203.0.113.7", &body).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn image_limiter_is_independent_of_excuse_limiter() {
    let excuse_driver = Arc::new(MockExcuseDriver::new_success(WELL_FORMED_PAYLOAD));
    let image_driver = Arc::new(MockImageDriver::new_success("aGVsbG8="));
    let state = state_with(Some(excuse_driver), Some(image_driver), 1);

    let excuse_body = json!({"scenario": "late", "audience": "My manager"});
    let image_body = json!({"excuseText": "A swan", "comedicStyle": "Deadpan"});

    // Exhaust the excuse window for this client.
    assert!(excuse_pipeline(&state, "client", &excuse_body).await.is_ok());
    let err = excuse_pipeline(&state, "client", &excuse_body).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);

    // The image endpoint still serves the same client.
    assert!(image_pipeline(&state, "client", &image_body).await.is_ok());
}

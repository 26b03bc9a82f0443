//! HTTP API server for the Alibi excuse generation service.
//!
//! Two POST endpoints drive the pipeline: `/api/generate-excuses` returns a
//! pair of contrasting excuses, `/api/generate-image` renders photographic
//! "evidence" for one. Each request flows rate limiter → validator →
//! credential check → prompt composer → generation client → interpreter,
//! and every failure maps to a structured `{"error": ...}` response; nothing
//! in the pipeline is fatal to the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod response;
mod state;
mod validate;

pub use api::{create_router, excuse_pipeline, image_pipeline};
pub use config::{EndpointConfig, ServerConfig};
pub use response::{ApiError, ImageResponse};
pub use state::AppState;
pub use validate::{validate_excuse, validate_image};

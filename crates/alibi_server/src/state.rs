//! Shared application state.

use crate::ServerConfig;
use alibi_error::{AlibiResult, ConfigError, ConfigErrorKind};
use alibi_interface::{ExcuseDriver, ImageDriver};
use alibi_models::{AnthropicClient, GeminiImageClient};
use alibi_rate_limit::{LimitConfig, WindowLimiter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// State shared by every request handler.
///
/// Drivers are `None` when the corresponding API key was absent at startup;
/// handlers check presence before any prompt work and answer with a
/// configuration failure, so a missing key degrades one endpoint instead of
/// stopping the process. The only mutable members are the rate limiter maps
/// and the random source, both behind their own locks.
#[derive(Clone)]
pub struct AppState {
    excuse_driver: Option<Arc<dyn ExcuseDriver>>,
    image_driver: Option<Arc<dyn ImageDriver>>,
    /// Per-client limiter for the excuses endpoint
    pub excuse_limiter: Arc<WindowLimiter>,
    /// Per-client limiter for the image endpoint
    pub image_limiter: Arc<WindowLimiter>,
    /// Random source for style resolution
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Create state with explicit drivers and limits.
    ///
    /// Tests use this to substitute mock drivers and a seeded random source.
    pub fn new(
        excuse_driver: Option<Arc<dyn ExcuseDriver>>,
        image_driver: Option<Arc<dyn ImageDriver>>,
        excuse_limits: LimitConfig,
        image_limits: LimitConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            excuse_driver,
            image_driver,
            excuse_limiter: Arc::new(WindowLimiter::new(excuse_limits)),
            image_limiter: Arc::new(WindowLimiter::new(image_limits)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Build state from configuration, reading API keys from the environment.
    pub fn from_config(config: &ServerConfig) -> Self {
        let excuse_driver = match env::var("ANTHROPIC_API_KEY") {
            Ok(key) => Some(Arc::new(AnthropicClient::new(
                key,
                &config.excuses.model,
                config.excuses.timeout(),
            )) as Arc<dyn ExcuseDriver>),
            Err(_) => {
                warn!("ANTHROPIC_API_KEY not set; excuse generation disabled");
                None
            }
        };

        let image_driver = match env::var("GEMINI_API_KEY") {
            Ok(key) => Some(Arc::new(GeminiImageClient::new(
                key,
                &config.images.model,
                config.images.timeout(),
            )) as Arc<dyn ImageDriver>),
            Err(_) => {
                warn!("GEMINI_API_KEY not set; image generation disabled");
                None
            }
        };

        Self::new(
            excuse_driver,
            image_driver,
            config.excuses.limits(),
            config.images.limits(),
            StdRng::from_entropy(),
        )
    }

    /// The excuse driver, or a configuration failure when credentials were
    /// absent at startup.
    pub fn excuse_driver(&self) -> AlibiResult<&Arc<dyn ExcuseDriver>> {
        self.excuse_driver.as_ref().ok_or_else(|| {
            ConfigError::new(ConfigErrorKind::MissingCredentials("anthropic")).into()
        })
    }

    /// The image driver, or a configuration failure when credentials were
    /// absent at startup.
    pub fn image_driver(&self) -> AlibiResult<&Arc<dyn ImageDriver>> {
        self.image_driver.as_ref().ok_or_else(|| {
            ConfigError::new(ConfigErrorKind::MissingCredentials("gemini")).into()
        })
    }
}

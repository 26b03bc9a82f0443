//! Server configuration.
//!
//! Layered TOML configuration in the bundled-defaults-plus-override style:
//! the defaults shipped with the crate are always present, and an optional
//! `./alibi.toml` in the working directory overrides them. API keys come
//! from the environment only.

use alibi_error::{AlibiError, AlibiResult, ConfigError, ConfigErrorKind};
use alibi_rate_limit::LimitConfig;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Settings for one generation endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndpointConfig {
    /// Upstream model identifier
    pub model: String,
    /// Wall-clock budget for one upstream call, in seconds
    pub timeout_secs: u64,
    /// Rate limit window length, in seconds
    pub window_secs: u64,
    /// Maximum requests per client per window
    pub max_requests: u32,
}

impl EndpointConfig {
    /// The upstream call budget as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The rate limiter settings for this endpoint.
    pub fn limits(&self) -> LimitConfig {
        LimitConfig::new(Duration::from_secs(self.window_secs), self.max_requests)
    }
}

/// Top-level server configuration.
///
/// # Example
///
/// ```no_run
/// use alibi_server::ServerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::load()?;
/// println!("binding to {}", config.bind);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "0.0.0.0:3001")
    pub bind: String,
    /// Excuse text endpoint settings
    pub excuses: EndpointConfig,
    /// Image endpoint settings
    pub images: EndpointConfig,
}

impl ServerConfig {
    /// Load configuration with precedence: user override > bundled default.
    ///
    /// The override file (`./alibi.toml`) is optional and silently skipped
    /// when absent.
    #[instrument]
    pub fn load() -> AlibiResult<Self> {
        debug!("Loading configuration: working dir override > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../alibi.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("alibi").required(false))
            .build()
            .map_err(|e| {
                AlibiError::from(ConfigError::new(ConfigErrorKind::Read(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                AlibiError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_deserialize() {
        let config = ServerConfig::load().unwrap();
        assert!(!config.bind.is_empty());
        assert_eq!(config.excuses.timeout(), Duration::from_secs(30));
        assert_eq!(config.images.timeout(), Duration::from_secs(60));
        assert!(config.images.max_requests <= config.excuses.max_requests);
    }
}

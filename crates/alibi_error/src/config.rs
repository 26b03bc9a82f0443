//! Configuration error types.

/// Specific error conditions for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Upstream credentials not present in the environment
    #[display("{} API key not configured", _0)]
    MissingCredentials(&'static str),
    /// Failed to read a configuration source
    #[display("Failed to read configuration: {}", _0)]
    Read(String),
    /// Failed to deserialize configuration
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use alibi_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingCredentials("gemini"));
/// assert!(format!("{}", err).contains("gemini"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

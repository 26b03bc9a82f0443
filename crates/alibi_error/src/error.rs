//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, InterpretError, ValidationError};

/// This is the foundation error enum. Each pipeline stage contributes
/// one variant, so callers can classify a failure without inspecting
/// display strings.
///
/// # Examples
///
/// ```
/// use alibi_error::{AlibiError, ValidationError, ValidationErrorKind};
///
/// let val_err = ValidationError::new(ValidationErrorKind::MissingFields);
/// let err: AlibiError = val_err.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AlibiErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Upstream generation call error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Response interpretation error
    #[from(InterpretError)]
    Interpret(InterpretError),
}

/// Alibi error with kind discrimination.
///
/// # Examples
///
/// ```
/// use alibi_error::{AlibiResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> AlibiResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::MissingCredentials("anthropic")))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Alibi Error: {}", _0)]
pub struct AlibiError(Box<AlibiErrorKind>);

impl AlibiError {
    /// Create a new error from a kind.
    pub fn new(kind: AlibiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AlibiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AlibiErrorKind
impl<T> From<T> for AlibiError
where
    T: Into<AlibiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Alibi operations.
///
/// # Examples
///
/// ```
/// use alibi_error::{AlibiResult, GenerationError, GenerationErrorKind};
///
/// fn call_upstream() -> AlibiResult<String> {
///     Err(GenerationError::new(GenerationErrorKind::Network(
///         "connection refused".to_string(),
///     )))?
/// }
/// ```
pub type AlibiResult<T> = std::result::Result<T, AlibiError>;

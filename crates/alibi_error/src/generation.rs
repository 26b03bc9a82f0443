//! Upstream generation call error types.

/// Specific failures of a call to an upstream generation service.
///
/// The pipeline performs exactly one attempt per call, so none of these
/// carry retry hints. Timeouts mean the in-flight call was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The call exceeded its wall-clock budget and was aborted
    #[display("Upstream call timed out after {}s", _0)]
    Timeout(u64),
    /// The upstream service answered with a non-2xx status
    #[display("Upstream returned HTTP {}: {}", status, message)]
    UpstreamStatus {
        /// HTTP status code from the upstream service
        status: u16,
        /// Sanitized message preview (first 200 bytes of the body)
        message: String,
    },
    /// The request never completed at the transport level
    #[display("Network error: {}", _0)]
    Network(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use alibi_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout(30));
/// assert!(format!("{}", err).contains("30s"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

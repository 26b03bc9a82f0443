//! Response interpretation error types.

/// Specific failures while interpreting an upstream response payload.
///
/// Parse and schema failures are kept distinct: a parse failure means the
/// payload was not valid JSON at all, a schema failure means it parsed but
/// did not match the expected result shape. The image variants map the
/// finish reasons the image service can end generation with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InterpretErrorKind {
    /// Payload was not valid JSON
    #[display("Failed to parse model output: {}", _0)]
    Parse(String),
    /// Payload parsed but did not match the expected shape
    #[display("Model output did not match the expected shape: {}", _0)]
    Schema(String),
    /// The image service returned no candidates at all
    #[display("Image response contained no candidates")]
    NoCandidates,
    /// Generation was stopped by the safety filter
    #[display("Image generation blocked by safety filters")]
    SafetyBlocked,
    /// Generation failed due to content restrictions on the inputs
    #[display("Image generation failed due to content restrictions")]
    ContentRestricted,
    /// Generation ended for another non-success reason
    #[display("Image generation stopped: {}", _0)]
    Blocked(String),
    /// The candidate carried no content parts
    #[display("Image response contained no content parts")]
    NoParts,
    /// The candidate carried parts but no inline image data
    #[display("Image response contained no image data")]
    NoImageData,
}

/// Interpretation error with source location tracking.
///
/// # Examples
///
/// ```
/// use alibi_error::{InterpretError, InterpretErrorKind};
///
/// let err = InterpretError::new(InterpretErrorKind::NoCandidates);
/// assert!(format!("{}", err).contains("no candidates"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Interpret Error: {} at line {} in {}", kind, line, file)]
pub struct InterpretError {
    /// The specific error condition
    pub kind: InterpretErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InterpretError {
    /// Create a new InterpretError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InterpretErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

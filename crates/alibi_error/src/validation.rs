//! Request validation error types.
//!
//! Every kind carries (or renders to) the exact message shown to the caller,
//! so classification and presentation stay in one place.

/// Specific validation failures for inbound request payloads.
///
/// Display strings are user-facing and returned verbatim in `400` bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Scenario and/or audience absent or empty
    #[display("Missing required fields. Please provide scenario and audience.")]
    MissingFields,
    /// Scenario has the wrong type or is blank after trimming
    #[display("Scenario must be a non-empty string.")]
    ScenarioNotString,
    /// Audience has the wrong type or is blank after trimming
    #[display("Audience must be a non-empty string.")]
    AudienceNotString,
    /// Scenario exceeds the length cap
    #[display("Scenario is too long. Please limit to 1000 characters.")]
    ScenarioTooLong,
    /// Custom options field has the wrong shape
    #[display("Custom options must be an object.")]
    OptionsNotObject,
    /// Requested comedic style does not resolve to a known style
    #[display("Unknown comedic style: {}.", _0)]
    UnknownStyle(String),
    /// More narrative elements selected than allowed
    #[display("Please select at most {} narrative elements.", _0)]
    TooManyElements(usize),
    /// The same narrative element selected twice
    #[display("Narrative element '{}' was selected more than once.", _0)]
    DuplicateElement(String),
    /// Narrative element id unknown or outside its availability window
    #[display("Narrative element '{}' is not currently available.", _0)]
    UnavailableElement(String),
    /// Excuse focus id not in the enumerated set
    #[display("Unknown excuse focus: {}.", _0)]
    UnknownFocus(String),
    /// Image request without excuse text
    #[display("Excuse text is required.")]
    MissingExcuseText,
    /// Image request without a comedic style
    #[display("Comedic style is required.")]
    MissingStyle,
    /// Excuse text has the wrong type or is blank after trimming
    #[display("Excuse text must be a non-empty string.")]
    ExcuseTextNotString,
    /// Excuse text exceeds the length cap
    #[display("Excuse text is too long. Please limit to 2000 characters.")]
    ExcuseTextTooLong,
    /// Headshot supplied without a MIME type
    #[display("Headshot MIME type is required when providing a headshot.")]
    MissingHeadshotMime,
    /// Headshot MIME type outside the allowed set
    #[display("Invalid image type. Only JPG and PNG are allowed.")]
    UnsupportedImageType,
    /// Headshot payload exceeds the size bound
    #[display("Image is too large. Please use an image under 5MB.")]
    HeadshotTooLarge,
    /// Headshot payload is not valid base64
    #[display("Invalid image format. Please upload a valid image file.")]
    InvalidBase64,
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use alibi_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::ScenarioTooLong);
/// assert!(format!("{}", err).contains("1000"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

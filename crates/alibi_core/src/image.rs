//! Image request and result types.

use crate::ComedicStyle;
use serde::{Deserialize, Serialize};

/// A user-supplied reference photo.
///
/// Held only for the lifetime of the request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headshot {
    /// Base64-encoded image bytes
    pub base64: String,
    /// MIME type of the encoded image ("image/jpeg" or "image/png")
    pub mime_type: String,
}

/// A validated image generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// The excuse text to illustrate
    pub excuse_text: String,
    /// The comedic style the excuse was written in
    pub comedic_style: ComedicStyle,
    /// Optional headshot to composite into the scene
    pub headshot: Option<Headshot>,
}

/// A generated image, returned to the caller as a data URI.
///
/// # Examples
///
/// ```
/// use alibi_core::GeneratedImage;
///
/// let image = GeneratedImage {
///     mime_type: "image/png".to_string(),
///     base64: "iVBORw0KGgo".to_string(),
/// };
/// assert_eq!(image.data_uri(), "data:image/png;base64,iVBORw0KGgo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// MIME type reported by the image service
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub base64: String,
}

impl GeneratedImage {
    /// Render the image as a browser-ready data URI.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

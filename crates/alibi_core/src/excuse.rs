//! Excuse result types.

use crate::ComedicStyle;
use serde::{Deserialize, Serialize};

/// A single generated excuse.
///
/// # Examples
///
/// ```
/// use alibi_core::Excuse;
///
/// let excuse = Excuse {
///     title: "Traffic Delay".to_string(),
///     text: "I got stuck behind an accident on the ring road.".to_string(),
/// };
/// assert!(!excuse.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Excuse {
    /// Short title for the excuse card
    pub title: String,
    /// The excuse body
    pub text: String,
}

/// The pair of contrasting excuses returned to the caller.
///
/// `excuse1` is always the mundane, believable excuse; `excuse2` is always
/// written in `comedic_style`, which is always a concrete style (never the
/// "surprise-me" sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcusePair {
    /// The mundane, believable excuse
    pub excuse1: Excuse,
    /// The risky, comedic excuse
    pub excuse2: Excuse,
    /// The style `excuse2` was generated under
    #[serde(rename = "comedicStyle")]
    pub comedic_style: ComedicStyle,
}

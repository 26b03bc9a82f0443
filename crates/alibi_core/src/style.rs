//! Comedic style enumeration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The fixed set of comedic styles for the risky excuse.
///
/// Styles carry no numeric ordering: selection is either explicit (a caller
/// names one) or uniformly random. Parsing is case-insensitive and accepts
/// the hyphenated lowercase form used by clients (`"self-deprecating"`).
///
/// # Examples
///
/// ```
/// use alibi_core::ComedicStyle;
/// use std::str::FromStr;
///
/// assert_eq!(ComedicStyle::from_str("deadpan").unwrap(), ComedicStyle::Deadpan);
/// assert_eq!(
///     ComedicStyle::from_str("Self-Deprecating").unwrap(),
///     ComedicStyle::SelfDeprecating,
/// );
/// assert_eq!(format!("{}", ComedicStyle::SelfDeprecating), "Self-deprecating");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ComedicStyle {
    /// Surreal, impossible scenarios delivered matter-of-factly
    Absurdist,
    /// Relatable frustrations of modern everyday life
    Observational,
    /// Outrageous content in a flat, serious register
    Deadpan,
    /// Small problems blown into world-ending catastrophes
    Hyperbolic,
    /// The speaker as the fool, owning the failure completely
    #[strum(to_string = "Self-deprecating")]
    SelfDeprecating,
    /// Contradictions where the fix creates the problem
    Ironic,
    /// Fourth-wall-breaking awareness that this is an excuse
    Meta,
    /// Elaborate conspiracies connecting unrelated events
    Paranoid,
}

// Wire format is the display name ("Self-deprecating"), not the variant name.
impl Serialize for ComedicStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ComedicStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown comedic style: {raw}")))
    }
}

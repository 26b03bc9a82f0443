//! Excuse focus enumeration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional directive biasing blame toward a category.
///
/// `LetAiDecide` is the neutral sentinel: it always validates but produces
/// no focus block in the prompt.
///
/// # Examples
///
/// ```
/// use alibi_core::ExcuseFocus;
/// use std::str::FromStr;
///
/// let focus = ExcuseFocus::from_str("blame-technology").unwrap();
/// assert_eq!(focus, ExcuseFocus::BlameTechnology);
/// assert!(ExcuseFocus::LetAiDecide.is_neutral());
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ExcuseFocus {
    /// Neutral sentinel: the generator chooses its own angle
    LetAiDecide,
    /// Blame apps, devices, and digital systems
    BlameTechnology,
    /// Blame weather and environmental factors
    BlameNature,
    /// Blame animals, pets, or wildlife
    BlameAnimals,
    /// Blame strangers and human interference
    BlameOtherPeople,
    /// Blame the speaker's own mistakes and poor judgment
    BlameYourself,
    /// Blame cosmic forces, fate, or universal conspiracy
    BlameUniverse,
    /// Blame traffic, transit, and vehicles
    BlameTransport,
    /// Blame temporal anomalies and the nature of time itself
    BlameTime,
}

impl ExcuseFocus {
    /// Whether this is the neutral "let the generator decide" sentinel.
    pub fn is_neutral(&self) -> bool {
        matches!(self, ExcuseFocus::LetAiDecide)
    }
}

impl Serialize for ExcuseFocus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ExcuseFocus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown excuse focus: {raw}")))
    }
}

//! Validated excuse generation request types.

use crate::{ComedicStyle, ExcuseFocus};

/// Caller's style choice before resolution.
///
/// `Surprise` covers both the explicit "surprise-me" sentinel and the
/// no-options case: either way a concrete style is drawn at random before
/// any prompt text is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleChoice {
    /// Draw a style uniformly at random from the full set
    Surprise,
    /// Use the named style deterministically
    Explicit(ComedicStyle),
}

/// Customisation options attached to an excuse request.
///
/// Produced by the request validator, so element ids are guaranteed to have
/// resolved against the currently available element set at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomOptions {
    /// Requested style, if any
    pub style: Option<StyleChoice>,
    /// Selected narrative element ids (at most 3, unique)
    pub narrative_elements: Vec<String>,
    /// Requested excuse focus, if any
    pub focus: Option<ExcuseFocus>,
}

/// A validated excuse generation request.
///
/// Immutable input to the prompt composer. Scenario and audience are
/// non-empty and within length bounds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcuseRequest {
    /// What happened (or failed to happen)
    pub scenario: String,
    /// Who the excuse is for
    pub audience: String,
    /// Optional customisation bundle
    pub options: Option<CustomOptions>,
}

impl ExcuseRequest {
    /// The effective style choice, treating absent options and absent style
    /// as "surprise me".
    pub fn style_choice(&self) -> StyleChoice {
        self.options
            .as_ref()
            .and_then(|opts| opts.style)
            .unwrap_or(StyleChoice::Surprise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_options_mean_surprise() {
        let request = ExcuseRequest {
            scenario: "I missed the train".to_string(),
            audience: "My manager".to_string(),
            options: None,
        };
        assert_eq!(request.style_choice(), StyleChoice::Surprise);
    }

    #[test]
    fn explicit_style_survives() {
        let request = ExcuseRequest {
            scenario: "I missed the train".to_string(),
            audience: "My manager".to_string(),
            options: Some(CustomOptions {
                style: Some(StyleChoice::Explicit(ComedicStyle::Deadpan)),
                ..Default::default()
            }),
        };
        assert_eq!(
            request.style_choice(),
            StyleChoice::Explicit(ComedicStyle::Deadpan),
        );
    }
}

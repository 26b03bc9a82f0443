//! Per-style visual templates for the image prompt.
//!
//! Each style carries two pre-written templates: one for compositing a
//! supplied headshot into the scene, one for environmental evidence with no
//! known subject. The shared people/text/quality rules live in the image
//! composer, not here.

use alibi_core::ComedicStyle;

/// The visual style template for a given comedic style.
///
/// `with_headshot` selects the compositing variant; otherwise the
/// environmental-evidence variant is returned.
pub fn visual_template(style: ComedicStyle, with_headshot: bool) -> &'static str {
    match (style, with_headshot) {
        (ComedicStyle::Absurdist, true) => {
            "VISUAL STYLE: Absurdist/Surreal Photography\n\
             Photorealistic image with surreal, reality-bending elements. The subject's face \
             and body must be photorealistic and fully recognizable, but the scenario should \
             defy logic and physics: floating objects, reversed gravity, impossible \
             juxtapositions, sentient objects shown through visual cues. Slight Dutch angle, \
             realistic lighting on the subject with dreamlike light sources in the scene."
        }
        (ComedicStyle::Absurdist, false) => {
            "VISUAL STYLE: Absurdist/Surreal Photography\n\
             Photorealistic environmental evidence with surreal, reality-bending elements and \
             no main subject. Impossible physics, objects in impossible contexts, dimensional \
             anomalies. Documentary style capturing scenarios that defy logic, with unusual \
             angles that enhance the surreality."
        }
        (ComedicStyle::Observational, true) => {
            "VISUAL STYLE: Modern Life Photography / Perfect Timing\n\
             Photorealistic capture of a relatable modern frustration with perfect comic \
             timing. The subject must be fully recognizable, caught mid-fail in an everyday \
             setting: coffee shop, office, public transit. Candid documentary framing, natural \
             lighting, the expression of realization clearly visible."
        }
        (ComedicStyle::Observational, false) => {
            "VISUAL STYLE: Modern Life Photography / Environmental Evidence\n\
             Photorealistic evidence of a relatable modern frustration: cracked phone screens, \
             error messages, spilled coffee, missed notifications. Unposed documentary capture \
             of the aftermath, focused on details everyone has experienced."
        }
        (ComedicStyle::Deadpan, true) => {
            "VISUAL STYLE: Serious Documentary / Editorial Photography\n\
             Formally composed, professionally shot photograph of absurd content. The subject \
             must be fully recognizable, maintaining a neutral, dignified expression while the \
             situation is ridiculous. Editorial magazine aesthetic, formal centered framing, \
             soft professional lighting with clean shadows."
        }
        (ComedicStyle::Deadpan, false) => {
            "VISUAL STYLE: Serious Documentary / Editorial Photography\n\
             Formally composed environmental evidence treating an absurd scenario with \
             documentary seriousness. Symmetrical framing, professional editorial lighting, \
             clean presentation of ridiculous aftermath."
        }
        (ComedicStyle::Hyperbolic, true) => {
            "VISUAL STYLE: Epic Dramatic / Movie Poster Photography\n\
             Dramatically composed, cinematically lit photograph treating mundane failure as \
             epic catastrophe. The subject must be fully recognizable, shot like an action \
             hero in their moment of defeat: low angle, exaggerated destruction, smoke and \
             debris, rim lighting and dramatic skies far beyond what actually happened."
        }
        (ComedicStyle::Hyperbolic, false) => {
            "VISUAL STYLE: Epic Dramatic / Disaster Photography\n\
             Cinematically composed environmental evidence of epic catastrophe from a mundane \
             situation. Extreme destruction scale, dramatic aftermath with smoke and debris, \
             wide shots emphasizing impossible scope, high-contrast disaster-movie lighting."
        }
        (ComedicStyle::SelfDeprecating, true) => {
            "VISUAL STYLE: Professional Photo / Amateur Moment\n\
             Professionally shot photograph of the subject looking foolish. The subject must \
             be fully recognizable and clearly the author of their own mistake: sheepish \
             expression, visible evidence of poor judgment. Clear honest framing, good \
             unflattering light, no shadows to hide behind."
        }
        (ComedicStyle::SelfDeprecating, false) => {
            "VISUAL STYLE: Evidence of Incompetence\n\
             Clear environmental evidence of foolish mistakes and poor judgment, amateur-hour \
             disaster professionally documented. Straightforward honest framing and lighting \
             showing everything."
        }
        (ComedicStyle::Ironic, true) => {
            "VISUAL STYLE: Situational Irony Photography\n\
             Photorealistic image showcasing visual irony: the subject, fully recognizable, in \
             a situation that is the opposite of what they intended. Ironic signage in the \
             background, safety equipment causing the accident, good intentions visibly \
             backfiring. Even lighting so the contradictions read clearly."
        }
        (ComedicStyle::Ironic, false) => {
            "VISUAL STYLE: Situational Irony Photography\n\
             Environmental evidence of a plan backfiring: contradictory elements framed \
             together, ironic warnings visible, the opposite outcome from the intention. \
             Natural documentary lighting with all ironic details legible."
        }
        (ComedicStyle::Meta, true) => {
            "VISUAL STYLE: Self-Aware / Fourth Wall Breaking Photography\n\
             Photorealistic image that acknowledges it is a staged excuse photo. The subject, \
             fully recognizable, looks directly at the camera with a knowing expression; props \
             are obviously arranged, light stands and backdrop edges visible in frame, \
             transparently posed."
        }
        (ComedicStyle::Meta, false) => {
            "VISUAL STYLE: Transparently Staged Evidence\n\
             Environmental evidence that obviously looks staged: props clearly placed, \
             behind-the-scenes setup visible, artificial lighting acknowledged in frame."
        }
        (ComedicStyle::Paranoid, true) => {
            "VISUAL STYLE: Conspiracy / Surveillance Photography\n\
             Photorealistic image with a paranoid, under-surveillance aesthetic. The subject \
             must be fully recognizable, framed from high security-camera angles as if being \
             watched, mysterious blurred figures in the background, harsh unflattering \
             surveillance lighting and ominous shadows."
        }
        (ComedicStyle::Paranoid, false) => {
            "VISUAL STYLE: Conspiracy / Surveillance Evidence\n\
             Environmental evidence with a surveillance aesthetic: security-footage angles, \
             conspiracy evidence scattered through the scene, caught-on-tape framing, harsh \
             fluorescent or night-vision lighting."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_style_has_both_variants() {
        for style in ComedicStyle::iter() {
            assert!(visual_template(style, true).contains("VISUAL STYLE"));
            assert!(visual_template(style, false).contains("VISUAL STYLE"));
            assert_ne!(visual_template(style, true), visual_template(style, false));
        }
    }

    #[test]
    fn headshot_variants_demand_recognizable_subject() {
        for style in ComedicStyle::iter() {
            assert!(visual_template(style, true).contains("recognizable"));
        }
    }
}

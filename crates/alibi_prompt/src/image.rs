//! Image prompt assembly.

use alibi_catalog::visual_template;
use alibi_core::ComedicStyle;

const RULES_DIVIDER: &str = "═══ CRITICAL RULES ═══";

// Rendered text from image models is unreliable, so both variants forbid it.
const TEXT_RULES: &str = "TEXT RULES (CRITICAL):\n\
     ✗ NO readable text beyond single words - AI text becomes gibberish\n\
     ✗ NO documents, newspapers, books, signs with multiple lines\n\
     ✗ NO speech bubbles with sentences\n\
     ✓ Single words only if essential (\"STOP\", \"EXIT\")\n\
     ✓ Focus on VISUAL storytelling, not text";

const PEOPLE_RULES_WITH_HEADSHOT: &str = "PEOPLE RULES:\n\
     ✓ ONLY the uploaded person may appear\n\
     ✓ Keep their face 100% recognizable (same person, just in this scenario)\n\
     ✓ Anonymous strangers in functional roles OK if essential (cop, waiter, random crowd)\n\
     ✗ NEVER: partners, family, friends, coworkers, anyone with a personal relationship\n\
     ✗ When unsure, show the subject alone";

const PEOPLE_RULES_WITHOUT_HEADSHOT: &str = "PEOPLE RULES:\n\
     ✗ NO specific identifiable people (we don't know the excuse-maker)\n\
     ✓ Anonymous generic people OK if essential (distant cop, crowd, stock-photo-style extras)\n\
     ✗ NEVER: anyone appearing to have a personal relationship\n\
     ✗ When unsure, focus on environment only";

/// Build the image prompt for an excuse.
///
/// Chooses between the per-style compositing template (headshot supplied)
/// and the environmental-evidence template (no headshot), then appends the
/// shared people/text/quality rules and the fixed 16:9 aspect ratio.
pub fn compose_image(excuse_text: &str, style: ComedicStyle, with_headshot: bool) -> String {
    let template = visual_template(style, with_headshot);

    let (task, people_rules, quality) = if with_headshot {
        (
            "YOUR TASK: Photograph this person in a scenario visually depicting their \
             excuse. Their face and body must remain 100% PHOTOREALISTIC and \
             RECOGNIZABLE - treat them as a real person being photographed, not a \
             cartoon or illustration. Integrate them naturally into the scene with \
             proper lighting, shadows, and perspective.",
            PEOPLE_RULES_WITH_HEADSHOT,
            "PHOTO QUALITY:\n\
             - Photorealistic subject integrated naturally into the styled scenario\n\
             - Proper lighting, shadows, perspective on the subject\n\
             - 16:9 aspect ratio",
        )
    } else {
        (
            "YOUR TASK: Create environmental evidence proving this excuse happened. \
             Focus on the scene, aftermath, or objects - NOT people (we don't know \
             what they look like). Photorealistic quality following the visual style.",
            PEOPLE_RULES_WITHOUT_HEADSHOT,
            "PHOTO QUALITY:\n\
             - Photorealistic environmental evidence\n\
             - Professional quality following the visual style\n\
             - 16:9 aspect ratio",
        )
    };

    format!(
        "{template}\n\n\
         EXCUSE CONTEXT: {excuse_text}\n\n\
         {task}\n\n\
         {RULES_DIVIDER}\n\n\
         {people_rules}\n\n\
         {TEXT_RULES}\n\n\
         {quality}",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn headshot_variant_demands_recognizable_faces() {
        let prompt = compose_image("A swan stole my keys", ComedicStyle::Deadpan, true);
        assert!(prompt.contains("RECOGNIZABLE"));
        assert!(prompt.contains("ONLY the uploaded person"));
        assert!(prompt.contains("EXCUSE CONTEXT: A swan stole my keys"));
    }

    #[test]
    fn no_headshot_variant_forbids_identifiable_people() {
        let prompt = compose_image("A swan stole my keys", ComedicStyle::Deadpan, false);
        assert!(prompt.contains("NO specific identifiable people"));
        assert!(!prompt.contains("ONLY the uploaded person"));
    }

    #[test]
    fn both_variants_forbid_readable_text_and_fix_aspect_ratio() {
        for with_headshot in [true, false] {
            let prompt = compose_image("excuse", ComedicStyle::Meta, with_headshot);
            assert!(prompt.contains("NO readable text"));
            assert!(prompt.contains("16:9 aspect ratio"));
        }
    }

    #[test]
    fn template_tracks_the_comedic_style() {
        for style in ComedicStyle::iter() {
            let prompt = compose_image("excuse", style, true);
            assert!(prompt.starts_with("VISUAL STYLE"));
        }
        assert!(compose_image("excuse", ComedicStyle::Paranoid, true).contains("Surveillance"));
    }
}

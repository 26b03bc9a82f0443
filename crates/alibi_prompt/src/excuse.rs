//! Excuse prompt assembly.

use crate::resolve_style;
use alibi_catalog::{comedy_block, find_available, focus_fragment};
use alibi_core::{ComedicStyle, ExcuseRequest};
use rand::Rng;

const DIVIDER: &str = "═══════════════════════════════════════════════════════════";

/// A composed prompt together with the style it was composed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// The full instruction text for the generation service
    pub prompt: String,
    /// The concrete style the comedic excuse will be written in
    pub style: ComedicStyle,
}

/// Resolve the request's style and build the excuse prompt.
///
/// Resolution runs first because the comedy block and the output contract
/// wording are style-dependent. `month`/`day` gate which narrative elements
/// may appear; an id that slipped past validation (e.g. across a midnight
/// boundary) is silently dropped rather than included while unavailable.
pub fn compose_excuse<R: Rng + ?Sized>(
    request: &ExcuseRequest,
    rng: &mut R,
    month: u32,
    day: u32,
) -> ComposedPrompt {
    let style = resolve_style(request.style_choice(), rng);
    ComposedPrompt {
        prompt: excuse_prompt(request, style, month, day),
        style,
    }
}

/// Build the excuse prompt for an already-resolved style.
///
/// Section order matters: register directive, scenario interpolation, the
/// mundane excuse instructions, the style-specific comedy block, then the
/// optional narrative-elements and focus blocks, and finally the output
/// contract.
pub fn excuse_prompt(
    request: &ExcuseRequest,
    style: ComedicStyle,
    month: u32,
    day: u32,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert excuse generator creating highly varied, genuinely funny \
         excuses for comedy entertainment. Generate TWO distinct excuses for the \
         following scenario.\n\n\
         LANGUAGE: Use British English spelling throughout (realise, colour, favour, \
         whilst, etc.)\n\n",
    );

    prompt.push_str(&format!(
        "SCENARIO: {}\nAUDIENCE: {}\n\n",
        request.scenario, request.audience
    ));

    prompt.push_str(&format!(
        "Generate TWO excuses - one mundane, one comedic:\n\n\
         {DIVIDER}\n\
         EXCUSE 1 - THE BELIEVABLE EXCUSE (Mundane & Practical)\n\
         {DIVIDER}\n\n\
         This is your BORING excuse. Make it:\n\
         - Completely mundane and realistic, something that actually could have happened\n\
         - Short and to the point (2-5 sentences)\n\
         - An EXCUSE (explain what prevented you), not an apology\n\
         - Title: short and boring (3-5 words) like \"Traffic Delay\" or \"Phone Battery Died\"\n\n\
         The humour comes from how BORING and ORDINARY this is compared to excuse 2.\n\n",
    ));

    prompt.push_str(&format!(
        "{DIVIDER}\n\
         EXCUSE 2 - THE RISKY EXCUSE ({style} Comedy Style)\n\
         {DIVIDER}\n\n\
         {block}\n\n\
         REQUIREMENTS:\n\
         - Length: 3-7 sentences (you have room to develop the comedy)\n\
         - Make it FUNNY and highly creative within this comedic style\n\
         - Title: short and punchy (4-6 words max)\n\
         - Appropriate for {audience} but push comedic boundaries\n\
         - Be SPECIFIC and VIVID, with fresh angles rather than overused tropes\n\n",
        block = comedy_block(style),
        audience = request.audience,
    ));

    let elements = selected_fragments(request, month, day);
    if !elements.is_empty() {
        prompt.push_str(
            "OPTIONAL SEASONING: if it feels natural, weave some of the following into \
             the comedic excuse. Treat them as inspiration, not a checklist:\n",
        );
        for fragment in &elements {
            prompt.push_str(&format!("- {fragment}\n"));
        }
        prompt.push('\n');
    }

    if let Some(focus) = request.options.as_ref().and_then(|opts| opts.focus) {
        let fragment = focus_fragment(focus);
        if !fragment.is_empty() {
            prompt.push_str(&format!(
                "CREATIVE ANGLE: {fragment} Treat this as a direction to lean, not a \
                 hard constraint.\n\n",
            ));
        }
    }

    prompt.push_str(&format!(
        "Remember: the two excuses should be POLAR OPPOSITES - one boring and \
         realistic, one wildly comedic using {style} style.\n\n\
         Return your response as a JSON object with this EXACT structure:\n\
         {{\n\
         \x20 \"excuse1\": {{\n\
         \x20   \"title\": \"short boring title (3-5 words)\",\n\
         \x20   \"text\": \"the mundane believable excuse (2-5 sentences)\"\n\
         \x20 }},\n\
         \x20 \"excuse2\": {{\n\
         \x20   \"title\": \"short punchy title (4-6 words)\",\n\
         \x20   \"text\": \"the {style} comedy excuse (3-7 sentences)\"\n\
         \x20 }}\n\
         }}\n\n\
         DO NOT include any text outside the JSON object. DO NOT use markdown code \
         blocks. Return ONLY the raw JSON.",
    ));

    prompt
}

/// Fragments for the request's narrative elements that are available on the
/// given date, in selection order.
fn selected_fragments(request: &ExcuseRequest, month: u32, day: u32) -> Vec<&'static str> {
    request
        .options
        .as_ref()
        .map(|opts| {
            opts.narrative_elements
                .iter()
                .filter_map(|id| find_available(id, month, day))
                .map(|element| element.prompt_fragment)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alibi_core::{CustomOptions, ExcuseFocus, StyleChoice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn plain_request() -> ExcuseRequest {
        ExcuseRequest {
            scenario: "I missed the train".to_string(),
            audience: "My manager".to_string(),
            options: None,
        }
    }

    #[test]
    fn interpolates_scenario_and_audience() {
        let prompt = excuse_prompt(&plain_request(), ComedicStyle::Deadpan, 6, 1);
        assert!(prompt.contains("SCENARIO: I missed the train"));
        assert!(prompt.contains("AUDIENCE: My manager"));
    }

    #[test]
    fn comedy_block_matches_resolved_style() {
        let prompt = excuse_prompt(&plain_request(), ComedicStyle::Paranoid, 6, 1);
        assert!(prompt.contains("PARANOID/CONSPIRACY"));
        assert!(prompt.contains("Paranoid Comedy Style"));
    }

    #[test]
    fn output_contract_names_both_excuse_fields() {
        let prompt = excuse_prompt(&plain_request(), ComedicStyle::Ironic, 6, 1);
        assert!(prompt.contains("\"excuse1\""));
        assert!(prompt.contains("\"excuse2\""));
        assert!(prompt.contains("ONLY the raw JSON"));
    }

    #[test]
    fn no_options_means_no_seasoning_or_angle_blocks() {
        let prompt = excuse_prompt(&plain_request(), ComedicStyle::Meta, 6, 1);
        assert!(!prompt.contains("OPTIONAL SEASONING"));
        assert!(!prompt.contains("CREATIVE ANGLE"));
    }

    #[test]
    fn selected_elements_appear_as_seasoning() {
        let mut request = plain_request();
        request.options = Some(CustomOptions {
            narrative_elements: vec!["suspicious-duck".to_string()],
            ..Default::default()
        });
        let prompt = excuse_prompt(&request, ComedicStyle::Absurdist, 6, 1);
        assert!(prompt.contains("OPTIONAL SEASONING"));
        assert!(prompt.contains("a suspicious-looking duck"));
        assert!(prompt.contains("not a checklist"));
    }

    #[test]
    fn unavailable_elements_are_dropped() {
        let mut request = plain_request();
        request.options = Some(CustomOptions {
            narrative_elements: vec!["halloween-chaos".to_string()],
            ..Default::default()
        });
        // June 1st: the Halloween window is closed.
        let prompt = excuse_prompt(&request, ComedicStyle::Absurdist, 6, 1);
        assert!(!prompt.contains("Halloween"));
        assert!(!prompt.contains("OPTIONAL SEASONING"));
    }

    #[test]
    fn neutral_focus_emits_no_angle_block() {
        let mut request = plain_request();
        request.options = Some(CustomOptions {
            focus: Some(ExcuseFocus::LetAiDecide),
            ..Default::default()
        });
        let prompt = excuse_prompt(&request, ComedicStyle::Deadpan, 6, 1);
        assert!(!prompt.contains("CREATIVE ANGLE"));
    }

    #[test]
    fn concrete_focus_emits_its_fragment() {
        let mut request = plain_request();
        request.options = Some(CustomOptions {
            focus: Some(ExcuseFocus::BlameTechnology),
            ..Default::default()
        });
        let prompt = excuse_prompt(&request, ComedicStyle::Deadpan, 6, 1);
        assert!(prompt.contains("CREATIVE ANGLE"));
        assert!(prompt.contains("blame technology"));
    }

    #[test]
    fn compose_resolves_explicit_style_deterministically() {
        let mut request = plain_request();
        request.options = Some(CustomOptions {
            style: Some(StyleChoice::Explicit(ComedicStyle::Hyperbolic)),
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        let composed = compose_excuse(&request, &mut rng, 6, 1);
        assert_eq!(composed.style, ComedicStyle::Hyperbolic);
        assert!(composed.prompt.contains("HYPERBOLIC"));
    }
}

//! Per-style comedy instruction blocks for the excuse prompt.

use alibi_core::ComedicStyle;

/// The instructional block for writing the comedic excuse in a given style.
///
/// Inserted verbatim into the excuse prompt after style resolution.
pub fn comedy_block(style: ComedicStyle) -> &'static str {
    match style {
        ComedicStyle::Absurdist => {
            "Use ABSURDIST comedy:\n\
             - Introduce surreal, impossible scenarios that defy logic and physics\n\
             - Include talking animals, sentient objects, or things that shouldn't exist\n\
             - Make the bizarre feel matter-of-fact (quantum mechanics in daily life, time paradoxes)\n\
             - Layer absurdity upon absurdity rather than settling for one weird thing\n\
             - Avoid cliches: don't just say \"aliens did it\", be creative and specific"
        }
        ComedicStyle::Observational => {
            "Use OBSERVATIONAL comedy:\n\
             - Point out the ironic, annoying, or contradictory aspects of everyday situations\n\
             - \"Have you ever noticed...\" style observations about modern life\n\
             - Make it relatable: focus on universal frustrations everyone experiences\n\
             - Examples: smartphone glitches at crucial moments, autocorrect disasters\n\
             - Avoid cliches: find fresh angles on common annoyances, not tired \"traffic sucks\" jokes"
        }
        ComedicStyle::Deadpan => {
            "Use DEADPAN comedy:\n\
             - State completely outrageous things in a serious, matter-of-fact tone\n\
             - No exclamation marks, no dramatics, just calm delivery of absurd content\n\
             - Use formal, professional language to describe ridiculous situations\n\
             - Examples: \"I was engaged in a minor territorial dispute with a swan\"\n\
             - Avoid being boring: make the content wild but the delivery flat"
        }
        ComedicStyle::Hyperbolic => {
            "Use HYPERBOLIC comedy:\n\
             - Blow everything wildly out of proportion\n\
             - Stack superlatives and extremes: epic, catastrophic, unprecedented\n\
             - Make small problems into world-ending events\n\
             - Examples: a missed alarm becomes an \"apocalyptic chronological failure\"\n\
             - Avoid cliches: don't just add \"really\", go ridiculously over the top"
        }
        ComedicStyle::SelfDeprecating => {
            "Use SELF-DEPRECATING comedy:\n\
             - Make yourself the fool: highlight your own flaws, mistakes, and poor judgment\n\
             - Own the failure completely, you are the problem, not circumstances\n\
             - Be specific about your incompetence (can't read clocks, terrible at technology)\n\
             - Examples: \"I have the spatial awareness of a concussed pigeon\"\n\
             - Avoid cliches: don't just say \"I'm bad at things\", be creatively self-critical"
        }
        ComedicStyle::Ironic => {
            "Use IRONIC comedy:\n\
             - Point out situations where the opposite of what should happen occurs\n\
             - Use dramatic irony: trying to fix something makes it worse\n\
             - Highlight hypocrisy or contradictory outcomes\n\
             - Examples: \"I was trying to be MORE responsible, which is exactly why I'm late\"\n\
             - Avoid cliches: find genuine ironic twists, not just sarcasm"
        }
        ComedicStyle::Meta => {
            "Use META comedy:\n\
             - Break the fourth wall: acknowledge you're making an excuse\n\
             - Be self-aware about how ridiculous and transparent the excuse is\n\
             - Comment on the excuse-making process itself\n\
             - Examples: \"I'm aware this sounds like an excuse, which it absolutely is, but...\"\n\
             - Avoid cliches: don't just say \"I know this sounds fake\", play with the meta-ness"
        }
        ComedicStyle::Paranoid => {
            "Use PARANOID/CONSPIRACY comedy:\n\
             - Connect unrelated events into elaborate conspiracy theories\n\
             - Everything is suspicious and interconnected\n\
             - Use phrases like \"it's no coincidence that...\" and \"they don't want you to know...\"\n\
             - Build increasingly complex chains of cause and effect\n\
             - Avoid cliches: don't just say \"Illuminati\", create specific, silly conspiracies"
        }
    }
}

//! Focus prompt fragments.

use alibi_core::ExcuseFocus;

/// How a focus is injected into the excuse prompt.
///
/// The neutral sentinel maps to an empty fragment and the composer emits no
/// focus block for it.
pub fn focus_fragment(focus: ExcuseFocus) -> &'static str {
    match focus {
        ExcuseFocus::LetAiDecide => "",
        ExcuseFocus::BlameTechnology => {
            "The excuse should primarily blame technology, apps, devices, or digital systems."
        }
        ExcuseFocus::BlameNature => {
            "The excuse should primarily blame natural phenomena, weather, or environmental factors."
        }
        ExcuseFocus::BlameAnimals => {
            "The excuse should primarily blame animals, pets, or wildlife."
        }
        ExcuseFocus::BlameOtherPeople => {
            "The excuse should primarily blame other people, strangers, or human interference."
        }
        ExcuseFocus::BlameYourself => {
            "The excuse should primarily blame your own mistakes, incompetence, or poor judgment."
        }
        ExcuseFocus::BlameUniverse => {
            "The excuse should primarily blame cosmic forces, fate, destiny, or universal conspiracies."
        }
        ExcuseFocus::BlameTransport => {
            "The excuse should primarily blame transportation issues, traffic, public transit, or vehicles."
        }
        ExcuseFocus::BlameTime => {
            "The excuse should primarily blame time paradoxes, temporal anomalies, or the nature of time itself."
        }
    }
}

//! Response interpretation: raw upstream payloads to core result types.

use crate::gemini::types::GenerateContentResponse;
use alibi_core::{ComedicStyle, Excuse, ExcusePair, GeneratedImage};
use alibi_error::{AlibiResult, InterpretError, InterpretErrorKind};
use serde::Deserialize;
use tracing::{debug, warn};

/// The excuse fields the model is contracted to return.
#[derive(Debug, Deserialize)]
struct ParsedExcuses {
    excuse1: Excuse,
    excuse2: Excuse,
}

/// Remove markdown code fence markers from a model payload.
///
/// The prompt forbids fencing, but models wrap JSON in fenced blocks anyway
/// often enough that stripping is cheaper than failing.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a text payload into an [`ExcusePair`] under the resolved style.
///
/// Invalid JSON is a parse failure; valid JSON missing either excuse, or
/// with an empty title or text, is a schema failure. On any failure the raw
/// payload stays in server-side logs and is never partially returned.
pub fn parse_excuse_pair(raw: &str, style: ComedicStyle) -> AlibiResult<ExcusePair> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(&cleaned).map_err(|e| {
        warn!(error = %e, payload_len = raw.len(), "Model payload was not valid JSON");
        InterpretError::new(InterpretErrorKind::Parse(e.to_string()))
    })?;

    let parsed: ParsedExcuses = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "Model payload did not match the excuse shape");
        InterpretError::new(InterpretErrorKind::Schema(e.to_string()))
    })?;

    for (field, excuse) in [("excuse1", &parsed.excuse1), ("excuse2", &parsed.excuse2)] {
        if excuse.title.trim().is_empty() || excuse.text.trim().is_empty() {
            return Err(InterpretError::new(InterpretErrorKind::Schema(format!(
                "{field} has an empty title or text"
            )))
            .into());
        }
    }

    debug!("Parsed excuse pair from model payload");
    Ok(ExcusePair {
        excuse1: parsed.excuse1,
        excuse2: parsed.excuse2,
        comedic_style: style,
    })
}

/// Interpret a Gemini generateContent response as a generated image.
///
/// The service can end generation for reasons other than success; each maps
/// to a distinct failure so the caller sees an actionable message instead of
/// a generic server error.
pub(crate) fn interpret_image(response: GenerateContentResponse) -> AlibiResult<GeneratedImage> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        warn!("Gemini response contained no candidates");
        return Err(InterpretError::new(InterpretErrorKind::NoCandidates).into());
    };

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if reason != "STOP" {
            warn!(finish_reason = reason, "Gemini stopped generation early");
            let kind = match reason {
                "SAFETY" => InterpretErrorKind::SafetyBlocked,
                "IMAGE_OTHER" => InterpretErrorKind::ContentRestricted,
                other => InterpretErrorKind::Blocked(other.to_string()),
            };
            return Err(InterpretError::new(kind).into());
        }
    }

    let parts = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default();
    if parts.is_empty() {
        warn!("Gemini candidate carried no content parts");
        return Err(InterpretError::new(InterpretErrorKind::NoParts).into());
    }

    let inline = parts
        .into_iter()
        .find_map(|part| part.inline_data)
        .and_then(|inline| inline.data.map(|data| (inline.mime_type, data)));

    match inline {
        Some((mime_type, data)) => Ok(GeneratedImage {
            mime_type: mime_type.unwrap_or_else(|| "image/png".to_string()),
            base64: data,
        }),
        None => {
            warn!("Gemini candidate carried no inline image data");
            Err(InterpretError::new(InterpretErrorKind::NoImageData).into())
        }
    }
}

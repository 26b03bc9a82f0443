//! Inbound payload validation.
//!
//! Validation operates on raw JSON values so that every failure produces
//! the exact user-facing message for that field, applied in order with the
//! first failure winning. No partial success: a request either becomes a
//! fully validated core type or is rejected.

use alibi_catalog::{MAX_NARRATIVE_ELEMENTS, find_available};
use alibi_core::{
    ComedicStyle, CustomOptions, ExcuseFocus, ExcuseRequest, Headshot, ImageRequest, StyleChoice,
};
use alibi_error::{ValidationError, ValidationErrorKind};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

const MAX_SCENARIO_CHARS: usize = 1000;
const MAX_EXCUSE_TEXT_CHARS: usize = 2000;
// 7MB of base64 decodes to roughly a 5MB image.
const MAX_HEADSHOT_BASE64_BYTES: usize = 7 * 1024 * 1024;

const ALLOWED_HEADSHOT_MIMES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

fn base64_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[A-Za-z0-9+/]*={0,2}$").expect("static regex"))
}

/// Whether a field is absent in the "missing required field" sense: not
/// supplied, null, or the empty string.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// The field as a non-blank string, if it is one.
fn non_blank_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Validate an excuses request body against the catalog as of `month`/`day`.
///
/// Rules in order: required fields present, correct primitive types,
/// scenario length cap, then each custom option against the enumerated
/// sets. Narrative element ids must resolve in the *currently available*
/// set; an id valid yesterday may be invalid today.
pub fn validate_excuse(
    body: &Value,
    month: u32,
    day: u32,
) -> Result<ExcuseRequest, ValidationError> {
    let scenario_field = body.get("scenario");
    let audience_field = body.get("audience");

    if is_missing(scenario_field) || is_missing(audience_field) {
        return Err(ValidationError::new(ValidationErrorKind::MissingFields));
    }

    let scenario = non_blank_str(scenario_field)
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::ScenarioNotString))?;
    let audience = non_blank_str(audience_field)
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::AudienceNotString))?;

    if scenario.chars().count() > MAX_SCENARIO_CHARS {
        return Err(ValidationError::new(ValidationErrorKind::ScenarioTooLong));
    }

    let options = match body.get("customOptions") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(validate_options(raw, month, day)?),
    };

    Ok(ExcuseRequest {
        scenario: scenario.to_string(),
        audience: audience.to_string(),
        options,
    })
}

fn validate_options(raw: &Value, month: u32, day: u32) -> Result<CustomOptions, ValidationError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::OptionsNotObject))?;

    let style = match object.get("style") {
        None | Some(Value::Null) => None,
        Some(value) => Some(validate_style(value)?),
    };

    let narrative_elements = match object.get("narrativeElements") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => validate_elements(value, month, day)?,
    };

    let focus = match object.get("excuseFocus") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let raw_focus = value.as_str().unwrap_or_default();
            Some(raw_focus.parse::<ExcuseFocus>().map_err(|_| {
                ValidationError::new(ValidationErrorKind::UnknownFocus(value_repr(value)))
            })?)
        }
    };

    Ok(CustomOptions {
        style,
        narrative_elements,
        focus,
    })
}

fn validate_style(value: &Value) -> Result<StyleChoice, ValidationError> {
    let raw = value
        .as_str()
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::UnknownStyle(value_repr(value))))?;

    if raw.eq_ignore_ascii_case("surprise-me") {
        return Ok(StyleChoice::Surprise);
    }

    raw.parse::<ComedicStyle>()
        .map(StyleChoice::Explicit)
        .map_err(|_| ValidationError::new(ValidationErrorKind::UnknownStyle(raw.to_string())))
}

fn validate_elements(
    value: &Value,
    month: u32,
    day: u32,
) -> Result<Vec<String>, ValidationError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::OptionsNotObject))?;

    if entries.len() > MAX_NARRATIVE_ELEMENTS {
        return Err(ValidationError::new(ValidationErrorKind::TooManyElements(
            MAX_NARRATIVE_ELEMENTS,
        )));
    }

    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let id = entry.as_str().ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::UnavailableElement(value_repr(entry)))
        })?;
        if ids.iter().any(|seen| seen == id) {
            return Err(ValidationError::new(ValidationErrorKind::DuplicateElement(
                id.to_string(),
            )));
        }
        if find_available(id, month, day).is_none() {
            return Err(ValidationError::new(
                ValidationErrorKind::UnavailableElement(id.to_string()),
            ));
        }
        ids.push(id.to_string());
    }

    Ok(ids)
}

/// Validate an image request body.
///
/// Headshot constraints run here, before any upstream call: MIME type
/// restricted to JPEG/PNG, encoded payload bounded, syntactically valid
/// base64 that actually decodes.
pub fn validate_image(body: &Value) -> Result<ImageRequest, ValidationError> {
    let excuse_field = body.get("excuseText");
    let style_field = body.get("comedicStyle");

    if is_missing(excuse_field) {
        return Err(ValidationError::new(ValidationErrorKind::MissingExcuseText));
    }
    if is_missing(style_field) {
        return Err(ValidationError::new(ValidationErrorKind::MissingStyle));
    }

    let excuse_text = non_blank_str(excuse_field)
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::ExcuseTextNotString))?;

    if excuse_text.chars().count() > MAX_EXCUSE_TEXT_CHARS {
        return Err(ValidationError::new(ValidationErrorKind::ExcuseTextTooLong));
    }

    let raw_style = style_field.and_then(Value::as_str).unwrap_or_default();
    let comedic_style = raw_style.parse::<ComedicStyle>().map_err(|_| {
        ValidationError::new(ValidationErrorKind::UnknownStyle(raw_style.to_string()))
    })?;

    let headshot = match non_blank_str(body.get("headshotBase64")) {
        None => None,
        Some(data) => Some(validate_headshot(data, body.get("headshotMimeType"))?),
    };

    Ok(ImageRequest {
        excuse_text: excuse_text.to_string(),
        comedic_style,
        headshot,
    })
}

fn validate_headshot(
    data: &str,
    mime_field: Option<&Value>,
) -> Result<Headshot, ValidationError> {
    let mime = non_blank_str(mime_field)
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingHeadshotMime))?;

    if !ALLOWED_HEADSHOT_MIMES.contains(&mime) {
        return Err(ValidationError::new(
            ValidationErrorKind::UnsupportedImageType,
        ));
    }

    if data.len() > MAX_HEADSHOT_BASE64_BYTES {
        return Err(ValidationError::new(ValidationErrorKind::HeadshotTooLarge));
    }

    if !base64_regex().is_match(data) {
        return Err(ValidationError::new(ValidationErrorKind::InvalidBase64));
    }

    if BASE64.decode(data).is_err() {
        return Err(ValidationError::new(ValidationErrorKind::InvalidBase64));
    }

    Ok(Headshot {
        base64: data.to_string(),
        mime_type: mime.to_string(),
    })
}

fn value_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

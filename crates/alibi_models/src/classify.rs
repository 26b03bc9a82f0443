//! Shared failure classification for upstream HTTP responses.

use alibi_error::{GenerationError, GenerationErrorKind};

/// How much of an upstream error body is kept for logs and error context.
const BODY_PREVIEW_BYTES: usize = 200;

/// Build the error for a non-2xx upstream response.
///
/// The body is reduced to a short preview so credentials or prompt internals
/// in upstream error payloads never travel further than the error context.
#[track_caller]
pub(crate) fn upstream_error(status: u16, body: &str) -> GenerationError {
    GenerationError::new(GenerationErrorKind::UpstreamStatus {
        status,
        message: preview(body),
    })
}

/// First 200 bytes of the body, on a character boundary.
pub(crate) fn preview(body: &str) -> String {
    let mut end = BODY_PREVIEW_BYTES.min(body.len());
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(preview(&body).len(), 200);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = preview(&body);
        assert!(cut.len() <= 200);
        assert!(cut.chars().all(|c| c == 'é'));
    }

    #[test]
    fn upstream_error_carries_status() {
        let err = upstream_error(503, "overloaded");
        match err.kind {
            GenerationErrorKind::UpstreamStatus { status, ref message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            ref other => panic!("unexpected kind: {other:?}"),
        }
    }
}

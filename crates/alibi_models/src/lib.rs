//! Upstream generation clients for the Alibi excuse generation service.
//!
//! Two providers back the pipeline: the Anthropic messages API writes the
//! excuse pairs, and the Gemini generateContent API renders the images. Both
//! clients perform a single bounded, cancellable attempt per call; the
//! response interpreters turn raw payloads into the core result types or a
//! distinct failure.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod classify;
mod gemini;
mod interpret;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiImageClient;
pub use interpret::{parse_excuse_pair, strip_code_fences};

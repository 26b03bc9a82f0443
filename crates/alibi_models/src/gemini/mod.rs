//! Gemini generateContent backend for excuse image generation.

mod client;
pub(crate) mod types;

pub use client::GeminiImageClient;

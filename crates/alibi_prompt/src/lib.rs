//! Prompt composition for the Alibi excuse generation service.
//!
//! Turns validated requests into the natural-language instructions sent to
//! the generation services. Style resolution happens here, before any prompt
//! text is built, because both the comedy block and the output contract
//! wording depend on the resolved style.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod excuse;
mod image;
mod style;

pub use excuse::{ComposedPrompt, compose_excuse, excuse_prompt};
pub use image::compose_image;
pub use style::resolve_style;

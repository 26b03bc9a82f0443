//! Trait definitions for the Alibi excuse generation service.
//!
//! These are the seams between the request pipeline and the external
//! generation services. Handlers hold trait objects, so tests can substitute
//! mock drivers without touching the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ExcuseDriver, ImageDriver};

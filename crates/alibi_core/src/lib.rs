//! Core data types for the Alibi excuse generation service.
//!
//! This crate provides the foundation data types shared across the Alibi
//! pipeline: request shapes, the comedic style and excuse focus enumerations,
//! narrative elements with calendar availability, and the excuse/image result
//! types returned to callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod element;
mod excuse;
mod focus;
mod image;
mod request;
mod style;

pub use element::{Availability, DateWindow, NarrativeElement};
pub use excuse::{Excuse, ExcusePair};
pub use focus::ExcuseFocus;
pub use image::{GeneratedImage, Headshot, ImageRequest};
pub use request::{CustomOptions, ExcuseRequest, StyleChoice};
pub use style::ComedicStyle;

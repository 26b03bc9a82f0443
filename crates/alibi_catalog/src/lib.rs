//! Static content catalog for the Alibi excuse generation service.
//!
//! Immutable tables mapping style, focus, and narrative element identifiers
//! to the prompt fragments the composer assembles. Narrative elements carry
//! calendar availability windows; every query takes the current month/day
//! explicitly so the tables stay pure data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod elements;
mod focus;
mod styles;
mod visual;

pub use elements::{
    ALWAYS_AVAILABLE_ELEMENTS, LIMITED_TIME_ELEMENTS, MAX_NARRATIVE_ELEMENTS, available_elements,
    find_available,
};
pub use focus::focus_fragment;
pub use styles::comedy_block;
pub use visual::visual_template;

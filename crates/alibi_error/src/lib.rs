//! Error types for the Alibi excuse generation service.
//!
//! This crate provides the foundation error types used throughout the Alibi
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use alibi_error::{AlibiResult, ConfigError, ConfigErrorKind};
//!
//! fn load_key() -> AlibiResult<String> {
//!     Err(ConfigError::new(ConfigErrorKind::MissingCredentials("anthropic")))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got key of length {}", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod interpret;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{AlibiError, AlibiErrorKind, AlibiResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use interpret::{InterpretError, InterpretErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

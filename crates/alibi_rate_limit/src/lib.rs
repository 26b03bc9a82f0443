//! Per-client request rate limiting.
//!
//! This crate provides a best-effort, single-process limiter: a fixed time
//! window and a maximum request count per client, with lazy probabilistic
//! expiry instead of a dedicated timer thread. Counters do not survive
//! process restarts and are not coordinated across processes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client_key;
mod limiter;

pub use client_key::{UNKNOWN_CLIENT, client_key};
pub use limiter::{LimitConfig, RateDecision, WindowLimiter};

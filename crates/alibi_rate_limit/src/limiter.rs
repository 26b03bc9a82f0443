//! Fixed-window request counting with lazy expiry.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Fraction of checks that trigger an expiry sweep of all windows.
const SWEEP_PROBABILITY: f64 = 0.01;

/// Limits for one endpoint: window length and maximum requests per window.
///
/// # Examples
///
/// ```
/// use alibi_rate_limit::LimitConfig;
///
/// let limits = LimitConfig::per_minute(20);
/// assert_eq!(limits.max_requests, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitConfig {
    /// Length of the counting window
    pub window: Duration,
    /// Maximum allowed requests within one window
    pub max_requests: u32,
}

impl LimitConfig {
    /// Create a config with an explicit window length.
    pub const fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
        }
    }

    /// Create a config with a 60-second window.
    pub const fn per_minute(max_requests: u32) -> Self {
        Self::new(Duration::from_secs(60), max_requests)
    }
}

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// The request may proceed
    Allowed,
    /// The client has exhausted its window
    Limited,
}

impl RateDecision {
    /// Whether the request was rejected.
    pub fn is_limited(&self) -> bool {
        matches!(self, RateDecision::Limited)
    }
}

/// One client's window state.
#[derive(Debug, Clone, Copy)]
struct ClientWindow {
    count: u32,
    window_end: Instant,
}

/// Per-client fixed-window request counter.
///
/// The check-then-increment path is synchronous and holds the map lock for
/// its whole duration, so concurrent requests for the same client cannot
/// interleave mid-check. Expired windows are removed opportunistically on a
/// small random fraction of checks; an expired entry that survives a sweep
/// is still never counted as active.
///
/// # Examples
///
/// ```
/// use alibi_rate_limit::{LimitConfig, WindowLimiter};
///
/// let limiter = WindowLimiter::new(LimitConfig::per_minute(2));
/// assert!(!limiter.check("10.0.0.1").is_limited());
/// assert!(!limiter.check("10.0.0.1").is_limited());
/// assert!(limiter.check("10.0.0.1").is_limited());
/// ```
#[derive(Debug)]
pub struct WindowLimiter {
    config: LimitConfig,
    windows: Mutex<HashMap<String, ClientWindow>>,
}

impl WindowLimiter {
    /// Create a limiter with the given limits.
    pub fn new(config: LimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Check and count a request for `key` against the current time.
    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    /// Check and count a request for `key` at an explicit instant.
    ///
    /// Absent or expired window: a fresh window starts with count 1 and the
    /// request is allowed. Window at capacity: the request is rejected
    /// without incrementing the stored count. Otherwise the count is
    /// incremented and the request is allowed.
    pub fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut windows = self.windows.lock().unwrap();

        if rand::random::<f64>() < SWEEP_PROBABILITY {
            let before = windows.len();
            windows.retain(|_, window| now <= window.window_end);
            debug!(
                swept = before - windows.len(),
                tracked = windows.len(),
                "Expired rate limit windows removed"
            );
        }

        match windows.get_mut(key) {
            Some(window) if now <= window.window_end => {
                if window.count >= self.config.max_requests {
                    return RateDecision::Limited;
                }
                window.count += 1;
                RateDecision::Allowed
            }
            _ => {
                windows.insert(
                    key.to_string(),
                    ClientWindow {
                        count: 1,
                        window_end: now + self.config.window,
                    },
                );
                RateDecision::Allowed
            }
        }
    }

    /// Remove every window whose end has passed.
    ///
    /// The check path runs this on a random fraction of calls; tests call it
    /// directly.
    pub fn sweep(&self, now: Instant) {
        let mut windows = self.windows.lock().unwrap();
        windows.retain(|_, window| now <= window.window_end);
    }

    /// Number of client windows currently held (including expired entries
    /// not yet swept).
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().unwrap().len()
    }

    /// The limits this limiter enforces.
    pub fn config(&self) -> LimitConfig {
        self.config
    }
}

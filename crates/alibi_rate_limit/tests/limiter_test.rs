//! Tests for the fixed-window rate limiter.

use alibi_rate_limit::{LimitConfig, RateDecision, WindowLimiter};
use std::time::{Duration, Instant};

fn limiter(max_requests: u32) -> WindowLimiter {
    WindowLimiter::new(LimitConfig::new(Duration::from_secs(60), max_requests))
}

#[test]
fn allows_up_to_the_maximum_then_rejects() {
    let limiter = limiter(20);
    let now = Instant::now();

    for n in 1..=20 {
        assert_eq!(
            limiter.check_at("203.0.113.7", now),
            RateDecision::Allowed,
            "request {n} should be allowed",
        );
    }

    // Requests 21-25 all land inside the same window.
    for n in 21..=25 {
        assert_eq!(
            limiter.check_at("203.0.113.7", now),
            RateDecision::Limited,
            "request {n} should be limited",
        );
    }
}

#[test]
fn rejection_does_not_consume_the_window() {
    let limiter = limiter(2);
    let start = Instant::now();

    assert!(!limiter.check_at("client", start).is_limited());
    assert!(!limiter.check_at("client", start).is_limited());
    assert!(limiter.check_at("client", start).is_limited());
    assert!(limiter.check_at("client", start).is_limited());

    // After the window elapses the same client starts fresh with count 1,
    // so it gets the full allowance again.
    let later = start + Duration::from_secs(61);
    assert!(!limiter.check_at("client", later).is_limited());
    assert!(!limiter.check_at("client", later).is_limited());
    assert!(limiter.check_at("client", later).is_limited());
}

#[test]
fn clients_are_counted_independently() {
    let limiter = limiter(1);
    let now = Instant::now();

    assert!(!limiter.check_at("client-a", now).is_limited());
    assert!(limiter.check_at("client-a", now).is_limited());
    assert!(!limiter.check_at("client-b", now).is_limited());
}

#[test]
fn sweep_drops_only_expired_windows() {
    let limiter = limiter(5);
    let start = Instant::now();

    limiter.check_at("old-client", start);
    limiter.check_at("new-client", start + Duration::from_secs(30));
    assert_eq!(limiter.tracked_clients(), 2);

    // 61s after start: old-client's window has ended, new-client's has not.
    limiter.sweep(start + Duration::from_secs(61));
    assert_eq!(limiter.tracked_clients(), 1);

    limiter.sweep(start + Duration::from_secs(120));
    assert_eq!(limiter.tracked_clients(), 0);
}

#[test]
fn expired_window_is_never_reused_as_active() {
    let limiter = limiter(1);
    let start = Instant::now();

    assert!(!limiter.check_at("client", start).is_limited());
    assert!(limiter.check_at("client", start).is_limited());

    // The stale entry may still be in the map, but a check after expiry
    // replaces it rather than counting against it.
    let later = start + Duration::from_secs(120);
    assert!(!limiter.check_at("client", later).is_limited());
}

//! Client identity derivation from reverse-proxy headers.

/// Shared bucket for requests with no usable client address.
///
/// All unidentified clients count against one window. Behind the expected
/// reverse proxy this case is rare; sharing a window fails closed rather
/// than leaving such clients unlimited.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Derive the rate limit key from proxy headers.
///
/// Precedence: the trusted `x-real-ip` value, then the leftmost entry of
/// the `x-forwarded-for` list, then the shared [`UNKNOWN_CLIENT`] bucket.
///
/// # Examples
///
/// ```
/// use alibi_rate_limit::client_key;
///
/// assert_eq!(client_key(Some("203.0.113.7"), None), "203.0.113.7");
/// assert_eq!(
///     client_key(None, Some("198.51.100.2, 10.0.0.1")),
///     "198.51.100.2",
/// );
/// assert_eq!(client_key(None, None), "unknown");
/// ```
pub fn client_key(real_ip: Option<&str>, forwarded_for: Option<&str>) -> String {
    if let Some(ip) = real_ip {
        let trimmed = ip.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if let Some(list) = forwarded_for {
        if let Some(first) = list.split(',').next() {
            let trimmed = first.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    UNKNOWN_CLIENT.to_string()
}

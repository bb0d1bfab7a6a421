//! Target URL scheme check.

use regex::Regex;
use std::sync::LazyLock;

/// Targets must be absolute `http` or `https` URLs.
pub static HTTP_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Returns true if `url` starts with `http://` or `https://`.
///
/// Only the scheme prefix is checked. Reachability and the rest of the URL
/// are left to the upstream fetch.
pub fn is_http_url(url: &str) -> bool {
    HTTP_URL_REGEX.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_http_url("http://example.com"));
        assert!(is_http_url("https://example.com/video.mp4?t=1"));
        assert!(is_http_url("https://"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_http_url(""));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url(" https://example.com"));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(!is_http_url("HTTPS://example.com"));
    }
}

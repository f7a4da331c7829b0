use regex::Regex;
use lazy_static::lazy_static;

/// Schemes the validator accepts.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

lazy_static! {
    // The path class includes ?/#/& so that a query string or fragment is
    // consumed as part of the URL rather than left for other patterns.
    static ref URL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?::\d{1,5})?(?:/[\w\-./%?#=&~+]*)?"
    ).unwrap();
}

pub fn extraction_pattern() -> &'static Regex {
    &URL_EXTRACTION_PATTERN
}

/// Secondary check on a raw pattern match: sane length, an allow-listed
/// scheme, and a host that is either dotted or the literal `localhost`.
pub fn is_valid(value: &str) -> bool {
    if value.len() > 200 {
        return false;
    }

    let (scheme, rest) = match value.split_once("://") {
        Some(parts) => parts,
        None => return false,
    };
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return false;
    }

    let host = rest
        .split(&['/', '?', '#'][..])
        .next()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("");
    !host.is_empty() && (host.contains('.') || host == "localhost")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        let valid_urls = vec![
            "http://example.com",
            "https://example.com",
            "http://www.example.com",
            "http://example.com/path",
            "http://example.com/path?query=value",
            "http://example.com:8080",
            "https://docs.google.com/presentation",
            "http://company-site.org/resources",
            "http://localhost/debug",
        ];

        for url in valid_urls {
            assert!(is_valid(url), "URL should be valid: {}", url);
        }
    }

    #[test]
    fn test_invalid_urls() {
        let invalid_urls = vec![
            "example.com",         // missing scheme
            "ftp://ftp.example.com", // scheme not allow-listed
            "http://",             // missing host
            "http://example",      // host has no dot
        ];

        for url in invalid_urls {
            assert!(!is_valid(url), "URL should be invalid: {}", url);
        }
    }

    #[test]
    fn test_too_long_url_rejected() {
        let url = format!("http://example.com/{}", "a".repeat(200));
        assert!(!is_valid(&url));
    }

    #[test]
    fn test_extraction_consumes_fragment() {
        let m = extraction_pattern()
            .find("see http://a.com/path#section for details")
            .unwrap();
        assert_eq!(m.as_str(), "http://a.com/path#section");
    }

    #[test]
    fn test_extraction_stops_at_punctuation() {
        let m = extraction_pattern()
            .find("visit http://example.com, then call")
            .unwrap();
        assert_eq!(m.as_str(), "http://example.com");
    }
}

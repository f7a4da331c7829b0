use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref EMAIL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();
}

pub fn extraction_pattern() -> &'static Regex {
    &EMAIL_EXTRACTION_PATTERN
}

/// Secondary check on a raw pattern match: sane length, a single `@`,
/// a non-empty local part, and a domain whose last label is at least
/// two alphabetic characters.
pub fn is_valid(value: &str) -> bool {
    if value.len() > 100 {
        return false;
    }
    if value.matches('@').count() != 1 {
        return false;
    }

    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || !domain.contains('.') {
        return false;
    }

    // Top-level label must be >= 2 alphabetic characters
    match domain.rsplit('.').next() {
        Some(tld) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "user123@example.co.uk",
            "user-name@example-domain.com",
            "a@b.co",
        ];

        for email in valid_emails {
            assert!(is_valid(email), "Email should be valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "a@b",             // no top-level label
            "@example.com",    // empty local part
            "user@example",    // domain has no dot
            "user@example.c",  // top-level label too short
            "user@example.c0", // top-level label not alphabetic
            "user@@example.com",
        ];

        for email in invalid_emails {
            assert!(!is_valid(email), "Email should be invalid: {}", email);
        }
    }

    #[test]
    fn test_too_long_email_rejected() {
        let email = format!("{}@example.com", "a".repeat(100));
        assert!(!is_valid(&email));
    }

    #[test]
    fn test_extraction_from_text() {
        let found: Vec<&str> = extraction_pattern()
            .find_iter("write to john.smith@example.com or sarah@company.co.uk today")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["john.smith@example.com", "sarah@company.co.uk"]);
    }
}

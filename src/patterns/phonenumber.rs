use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // US numbers with optional +1 country code, parentheses and
    // dash/dot/space separators. The trailing \b keeps the match from
    // ending inside a longer digit run.
    static ref PHONE_EXTRACTION_PATTERN: Regex = Regex::new(
        r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b"
    ).unwrap();
}

pub fn extraction_pattern() -> &'static Regex {
    &PHONE_EXTRACTION_PATTERN
}

/// Strip separators and reduce to the canonical 10-digit US form.
///
/// Returns `None` when the digits do not form a plausible US number:
/// anything other than 10 significant digits (after dropping a leading
/// `1` country digit), or an area code starting with 0 or 1.
pub fn normalize(value: &str) -> Option<String> {
    let mut digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }
    if digits.len() != 10 {
        return None;
    }
    if !matches!(digits.as_bytes()[0], b'2'..=b'9') {
        return None;
    }
    Some(digits)
}

pub fn is_valid(value: &str) -> bool {
    normalize(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        let valid_phones = vec![
            "(212) 555-0199",
            "212-555-0199",
            "212.555.0199",
            "212 555 0199",
            "2125550199",
            "+1 212-555-0199",
            "1-212-555-0199",
        ];

        for phone in valid_phones {
            assert!(is_valid(phone), "Should be valid: {}", phone);
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        let invalid_phones = vec![
            "555-0199",         // 7 digits, no area code
            "(123) 456-7890",   // area code starts with 1
            "(012) 555-0199",   // area code starts with 0
            "212-555-019",      // 9 digits
            "212-555-01999",    // 11 digits without country code
        ];

        for phone in invalid_phones {
            assert!(!is_valid(phone), "Should be invalid: {}", phone);
        }
    }

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("(212) 555-0199").as_deref(), Some("2125550199"));
        assert_eq!(normalize("+1 212.555.0199").as_deref(), Some("2125550199"));
        assert_eq!(normalize("555-0199"), None);
    }

    #[test]
    fn test_extraction_from_text() {
        let found: Vec<&str> = extraction_pattern()
            .find_iter("call (212) 555-0199 or 646.555.0123 before noon")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["(212) 555-0199", "646.555.0123"]);
    }

    #[test]
    fn test_short_number_not_extracted() {
        assert!(extraction_pattern().find("ext. 555-0199 only").is_none());
    }
}

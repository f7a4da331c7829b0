use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref HASHTAG_EXTRACTION_PATTERN: Regex = Regex::new(
        r"#[A-Za-z0-9_]+"
    ).unwrap();
}

pub fn extraction_pattern() -> &'static Regex {
    &HASHTAG_EXTRACTION_PATTERN
}

/// A hashtag needs at least one character after the `#`, stays under 50
/// characters total, and is not purely numeric (`#2024` is a year, not
/// a tag).
pub fn is_valid(value: &str) -> bool {
    if value.len() < 2 || value.len() > 50 {
        return false;
    }
    let content = match value.strip_prefix('#') {
        Some(content) => content,
        None => return false,
    };
    !content.chars().all(|c| c.is_ascii_digit())
}

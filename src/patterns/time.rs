use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref TIME12_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\b\d{1,2}:\d{2}\s?(?:AM|PM|am|pm)\b"
    ).unwrap();

    static ref TIME24_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\b\d{1,2}:\d{2}\b"
    ).unwrap();
}

pub fn extraction_pattern_12h() -> &'static Regex {
    &TIME12_EXTRACTION_PATTERN
}

pub fn extraction_pattern_24h() -> &'static Regex {
    &TIME24_EXTRACTION_PATTERN
}

fn parse_hhmm(value: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = value.split_once(':')?;
    if minutes.len() != 2 {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// 12-hour clock with AM/PM marker: hour in 1-12, minute in 0-59.
pub fn is_valid_12h(value: &str) -> bool {
    let trimmed = value.trim();
    let time_part = trimmed
        .strip_suffix("AM")
        .or_else(|| trimmed.strip_suffix("PM"))
        .or_else(|| trimmed.strip_suffix("am"))
        .or_else(|| trimmed.strip_suffix("pm"));

    match time_part.and_then(|t| parse_hhmm(t.trim_end())) {
        Some((hours, minutes)) => (1..=12).contains(&hours) && minutes <= 59,
        None => false,
    }
}

/// Bare 24-hour clock: hour in 0-23, minute in 0-59.
pub fn is_valid_24h(value: &str) -> bool {
    match parse_hhmm(value.trim()) {
        Some((hours, minutes)) => hours <= 23 && minutes <= 59,
        None => false,
    }
}

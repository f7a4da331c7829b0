pub mod email;
pub mod hashtag;
pub mod phonenumber;
pub mod time;
pub mod url;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The closed set of data types the extractor recognizes. Declaration
/// order is the fixed scan order, which also decides precedence when
/// candidate spans overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Email,
    Url,
    PhoneUs,
    Time12,
    Time24,
    Hashtag,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Email,
        Category::Url,
        Category::PhoneUs,
        Category::Time12,
        Category::Time24,
        Category::Hashtag,
    ];

    /// Short label used on the command line and in stats output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Url => "url",
            Category::PhoneUs => "phone",
            Category::Time12 => "time12",
            Category::Time24 => "time24",
            Category::Hashtag => "hashtag",
        }
    }

    pub fn parse_label(value: &str) -> Option<Category> {
        match value.to_ascii_lowercase().as_str() {
            "email" => Some(Category::Email),
            "url" => Some(Category::Url),
            "phone" => Some(Category::PhoneUs),
            "time12" => Some(Category::Time12),
            "time24" => Some(Category::Time24),
            "hashtag" => Some(Category::Hashtag),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry of the rule table: an extraction regex plus the secondary
/// validation predicate applied to each raw match.
pub struct PatternRule {
    pub category: Category,
    pub pattern: &'static Regex,
    pub validate: fn(&str) -> bool,
}

lazy_static! {
    static ref RULES: [PatternRule; 6] = [
        PatternRule {
            category: Category::Email,
            pattern: email::extraction_pattern(),
            validate: email::is_valid,
        },
        PatternRule {
            category: Category::Url,
            pattern: url::extraction_pattern(),
            validate: url::is_valid,
        },
        PatternRule {
            category: Category::PhoneUs,
            pattern: phonenumber::extraction_pattern(),
            validate: phonenumber::is_valid,
        },
        PatternRule {
            category: Category::Time12,
            pattern: time::extraction_pattern_12h(),
            validate: time::is_valid_12h,
        },
        PatternRule {
            category: Category::Time24,
            pattern: time::extraction_pattern_24h(),
            validate: time::is_valid_24h,
        },
        PatternRule {
            category: Category::Hashtag,
            pattern: hashtag::extraction_pattern(),
            validate: hashtag::is_valid,
        },
    ];
}

/// The fixed rule table, compiled once and shared by every scan.
pub fn rules() -> &'static [PatternRule] {
    &*RULES
}

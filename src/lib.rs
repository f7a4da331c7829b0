pub mod patterns;

pub use patterns::{Category, PatternRule};

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// A single accepted match: the category it belongs to, the matched
/// text, and its byte span within the scanned input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub category: Category,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Output of one scan: accepted matches ordered by category (fixed rule
/// order) then position, plus per-category counts of candidates the
/// validators rejected. Rejected text is never carried here.
#[derive(Debug, Default, Serialize)]
pub struct ExtractionResult {
    pub matches: Vec<Match>,
    pub rejected: BTreeMap<Category, usize>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn for_category(&self, category: Category) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.for_category(category).count()
    }

    pub fn rejected_count(&self, category: Category) -> usize {
        self.rejected.get(&category).copied().unwrap_or(0)
    }

    pub fn total_valid(&self) -> usize {
        self.matches.len()
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Drop matches and rejected counts for categories the predicate
    /// turns down.
    pub fn retain_categories<F: Fn(Category) -> bool>(&mut self, keep: F) {
        self.matches.retain(|m| keep(m.category));
        self.rejected.retain(|category, _| keep(*category));
    }
}

fn overlaps_claimed(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

/// Scan `text` with the fixed rule table and return every candidate
/// that survives its category's validator.
///
/// Rules run in declaration order; an accepted match claims its byte
/// span, and later-category candidates touching a claimed span are
/// skipped before validation. This keeps a fragment inside an accepted
/// URL from doubling as a hashtag, and the `3:45` inside `3:45 PM`
/// from doubling as a 24-hour time. Rejected candidates claim nothing.
/// Within a category, duplicate text is reported once at its first
/// occurrence.
///
/// Pure function of its input: no I/O, no shared mutable state, safe
/// to call concurrently.
pub fn extract(text: &str) -> ExtractionResult {
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut matches = Vec::new();
    let mut rejected: BTreeMap<Category, usize> = BTreeMap::new();

    for rule in patterns::rules() {
        let mut seen: HashSet<&str> = HashSet::new();
        for candidate in rule.pattern.find_iter(text) {
            if overlaps_claimed(&claimed, candidate.start(), candidate.end()) {
                continue;
            }
            if !(rule.validate)(candidate.as_str()) {
                *rejected.entry(rule.category).or_insert(0) += 1;
                continue;
            }
            claimed.push((candidate.start(), candidate.end()));
            // Duplicates still claim their span, but only the first
            // occurrence is reported.
            if !seen.insert(candidate.as_str()) {
                continue;
            }
            matches.push(Match {
                category: rule.category,
                text: candidate.as_str().to_string(),
                start: candidate.start(),
                end: candidate.end(),
            });
        }
    }

    ExtractionResult { matches, rejected }
}

//! Jira issue key extraction.
//!
//! Keys are found by applying a fixed, ordered table of patterns to free
//! text (PR title, branch name, body). Every match from every pattern is
//! upper-cased and collected into an [`IssueKeys`] set.
//!
//! Patterns are unanchored, so a single token can produce more than one key:
//! `ABC-12345` yields both `BC-12345` and `ABC-12345`. Lowercase text only
//! matches the two-letter `xx-1234` shape, so prose like `utf-8` or
//! `sha-256` is never taken for a key.

mod patterns;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

pub use patterns::ISSUE_PATTERNS;

/// A deduplicated set of normalized (uppercase) issue keys.
///
/// Ordered so that joined lists are stable, but callers should treat the
/// contents as a set.
pub type IssueKeys = BTreeSet<String>;

/// Extract all issue keys from `text`.
///
/// Empty text yields an empty set.
pub fn extract_issue_keys(text: &str) -> IssueKeys {
    let mut keys = IssueKeys::new();
    if text.is_empty() {
        return keys;
    }

    for pattern in ISSUE_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            keys.insert(m.as_str().to_uppercase());
        }
    }

    keys
}

/// Union of several key sets.
pub fn union<'a>(sets: impl IntoIterator<Item = &'a IssueKeys>) -> IssueKeys {
    sets.into_iter().flatten().cloned().collect()
}

/// Format a key set as a comma-separated list.
pub fn join(keys: &IssueKeys) -> String {
    keys.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

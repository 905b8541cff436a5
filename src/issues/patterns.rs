//! Compiled issue key patterns.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern sources, in application order.
///
/// 1. Two-letter project keys with 4-5 digit numbers (`TT-0000` .. `TT-99999`).
///    Only this shape accepts a lowercase prefix (`tt-1234` in branch names).
/// 2. The `SYSE` project, which uses short numbers (`SYSE-339`).
/// 3. Any other uppercase project key.
const PATTERN_SOURCES: [&str; 3] = [
    r"(?i:[A-Z]{2})-[0-9]{4,5}",
    r"SYSE-[0-9]+",
    r"[A-Z]+-[0-9]+",
];

/// The compiled pattern table, built once per process.
pub static ISSUE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|src| Regex::new(src).expect("Invalid issue key regex"))
        .collect()
});

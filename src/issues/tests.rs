//! Tests for issue key extraction.

use super::*;

fn keys(items: &[&str]) -> IssueKeys {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_text_yields_empty_set() {
    assert!(extract_issue_keys("").is_empty());
}

#[test]
fn test_text_without_keys_yields_empty_set() {
    assert!(extract_issue_keys("Fix login bug").is_empty());
    assert!(extract_issue_keys("feature/login").is_empty());
}

#[test]
fn test_two_letter_key_in_title() {
    assert_eq!(extract_issue_keys("Fix login bug TT-1234"), keys(&["TT-1234"]));
}

#[test]
fn test_key_inside_branch_name() {
    assert_eq!(
        extract_issue_keys("feature/TT-1234-login"),
        keys(&["TT-1234"])
    );
}

#[test]
fn test_syse_prefix_with_short_number() {
    assert_eq!(extract_issue_keys("SYSE-339 tidy up"), keys(&["SYSE-339"]));
}

#[test]
fn test_general_fallback_pattern() {
    assert_eq!(extract_issue_keys("see PLAT-7"), keys(&["PLAT-7"]));
}

#[test]
fn test_lowercase_normalizes_and_collapses() {
    let found = extract_issue_keys("ab-1234 and AB-1234");
    assert_eq!(found, keys(&["AB-1234"]));
}

#[test]
fn test_multiple_keys_are_all_collected() {
    let found = extract_issue_keys("AB-1111, CD-2222 and AB-1111 again");
    assert_eq!(found, keys(&["AB-1111", "CD-2222"]));
}

#[test]
fn test_unanchored_patterns_overlap_on_long_prefixes() {
    // The two-letter pattern also matches the tail of a longer project key.
    let found = extract_issue_keys("ABC-12345");
    assert_eq!(found, keys(&["ABC-12345", "BC-12345"]));
}

#[test]
fn test_extraction_is_idempotent() {
    let text = "Merge WEB-42 into feature/ab-1234 (closes SYSE-9)";
    let first = extract_issue_keys(text);
    let second = extract_issue_keys(text);
    assert_eq!(first, second);
    assert!(first.contains("WEB-42"));
    assert!(first.contains("AB-1234"));
    assert!(first.contains("SYSE-9"));
}

#[test]
fn test_union_deduplicates_across_sets() {
    let a = keys(&["AB-1111", "CD-2222"]);
    let b = keys(&["CD-2222"]);
    let c = IssueKeys::new();
    assert_eq!(union([&a, &b, &c]), keys(&["AB-1111", "CD-2222"]));
}

#[test]
fn test_join_formats_comma_separated() {
    assert_eq!(join(&keys(&["AB-1111"])), "AB-1111");
    assert_eq!(join(&IssueKeys::new()), "");

    let joined = join(&keys(&["AB-1111", "CD-2222"]));
    let parts: IssueKeys = joined.split(", ").map(String::from).collect();
    assert_eq!(parts, keys(&["AB-1111", "CD-2222"]));
}

#[test]
fn test_lowercase_words_with_numbers_are_not_keys() {
    assert!(extract_issue_keys("Fix utf-8 decoding").is_empty());
    assert!(extract_issue_keys("switch hashing to sha-256 on python-3").is_empty());
    assert!(extract_issue_keys("hotfix/login-2fa").is_empty());
}

#[test]
fn test_lowercase_long_prefix_only_matches_two_letter_tail() {
    assert_eq!(extract_issue_keys("feature/abc-12345"), keys(&["BC-12345"]));
}

#[test]
fn test_lowercase_syse_is_not_a_key() {
    assert!(extract_issue_keys("syse-339").is_empty());
}

//! Branch skip decision.
//!
//! A configured regex exempts matching branches (release branches, bot
//! branches, ...) from every check. A malformed pattern never fails the
//! build: it is reported as a warning and no branch is skipped.

use crate::actions;
use regex::Regex;

/// Returns true if `branch` matches the configured skip pattern.
pub fn should_skip_branch(branch: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(branch),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "ignoring invalid skip-branches regex");
            actions::warning(&format!("Invalid skip-branches regex: {}", e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_never_skips() {
        assert!(!should_skip_branch("release/v2", ""));
        assert!(!should_skip_branch("", ""));
    }

    #[test]
    fn test_matching_branch_is_skipped() {
        assert!(should_skip_branch("release/v2", "^release/"));
        assert!(should_skip_branch("dependabot/cargo/serde-1.0", "^(dependabot|renovate)/"));
    }

    #[test]
    fn test_non_matching_branch_is_not_skipped() {
        assert!(!should_skip_branch("feature/TT-1234-login", "^release/"));
    }

    #[test]
    fn test_pattern_is_unanchored_unless_written_anchored() {
        assert!(should_skip_branch("hotfix/release/v2", "release/"));
        assert!(!should_skip_branch("hotfix/release/v2", "^release/"));
    }

    #[test]
    fn test_invalid_pattern_fails_open() {
        assert!(!should_skip_branch("release/v2", "(release"));
        assert!(!should_skip_branch("release/v2", "[unclosed"));
    }
}

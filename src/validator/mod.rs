//! Pull request validation policy.
//!
//! Runs the checks in order, stopping at the first failure:
//!
//! 1. Skip-branch pattern matches: skipped, nothing else runs
//! 2. Extract issue keys from title, branch, and body
//! 3. Title has no key: failure
//! 4. Check every unique key (or assume valid when status checks are off)
//! 5. Status checks on and any key invalid: failure
//! 6. Title and branch both have keys but share none: failure
//! 7. Success
//!
//! Step 6 does not fire when the branch has no keys at all.

mod types;


pub use types::{Findings, RunStatus, Verdict};

use crate::config::Config;
use crate::issues::{self, IssueKeys, extract_issue_keys};
use crate::event::PullRequestInfo;
use crate::report::{generate_report, skipped_report};
use crate::skip::should_skip_branch;
use crate::status::{StatusChecker, ValidationOutcome};

pub const MISSING_TITLE_KEY: &str = "PR title must contain a valid Jira issue ID";
pub const TITLE_BRANCH_MISMATCH: &str = "mismatch between Jira issues in PR title and branch name";

/// Applies the validation policy to one pull request.
pub struct Validator<'a> {
    skip_branches: &'a str,
    validate_issue_status: bool,
    checker: &'a dyn StatusChecker,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a Config, checker: &'a dyn StatusChecker) -> Self {
        Self {
            skip_branches: &config.skip_branches,
            validate_issue_status: config.validate_issue_status,
            checker,
        }
    }

    pub fn validate(&self, pr: &PullRequestInfo) -> Verdict {
        if should_skip_branch(&pr.source_branch, self.skip_branches) {
            tracing::info!(branch = %pr.source_branch, "skipping validation for branch");
            return Verdict::skipped(skipped_report(&pr.source_branch));
        }

        let findings = Findings {
            title: extract_issue_keys(&pr.title),
            branch: extract_issue_keys(&pr.source_branch),
            body: extract_issue_keys(&pr.body),
        };

        tracing::info!(
            title = %issues::join(&findings.title),
            branch = %issues::join(&findings.branch),
            body = %issues::join(&findings.body),
            "extracted issue keys"
        );

        if findings.title.is_empty() {
            let report = generate_report(&findings, &[]);
            return Verdict::failure(report, MISSING_TITLE_KEY, findings, Vec::new());
        }

        let outcomes = self.check_all(&findings.all());

        if self.validate_issue_status {
            let invalid: Vec<&str> = outcomes
                .iter()
                .filter(|o| !o.valid)
                .map(|o| o.issue_key.as_str())
                .collect();

            if !invalid.is_empty() {
                let message = format!("invalid Jira issues found: {}", invalid.join(", "));
                let report = generate_report(&findings, &outcomes);
                return Verdict::failure(report, message, findings, outcomes);
            }
        }

        if !findings.branch.is_empty() && findings.title.is_disjoint(&findings.branch) {
            let report = generate_report(&findings, &outcomes);
            return Verdict::failure(report, TITLE_BRANCH_MISMATCH, findings, outcomes);
        }

        let report = generate_report(&findings, &outcomes);
        Verdict::success(report, findings, outcomes)
    }

    fn check_all(&self, keys: &IssueKeys) -> Vec<ValidationOutcome> {
        keys.iter()
            .map(|key| {
                if self.validate_issue_status {
                    self.checker.check(key)
                } else {
                    ValidationOutcome::valid(key.as_str())
                }
            })
            .collect()
    }
}

//! Markdown report rendering.
//!
//! Reports are pure functions of the findings and outcomes, rebuilt on every
//! run. The leading HTML comment lets a later workflow step locate and update
//! a previously posted PR comment.

use crate::issues::{self, IssueKeys};
use crate::status::ValidationOutcome;
use crate::validator::Findings;

/// Hidden marker identifying keylint's PR comment.
pub const REPORT_MARKER: &str = "<!-- jira-lint-comment -->";

const HEADER: &str = "## 🔍 Jira Issue Validation Report";

/// Render the validation report.
///
/// Sections: title, branch, and body findings; a consistency warning when
/// more than one distinct key was found overall; and per-issue details when
/// `outcomes` is non-empty.
pub fn generate_report(findings: &Findings, outcomes: &[ValidationOutcome]) -> String {
    let mut report = format!("{}\n{}\n\n", REPORT_MARKER, HEADER);

    report.push_str("### PR Title\n");
    report.push_str(&found_line(
        &findings.title,
        "❌ **No Jira issue found in PR title** (Required)",
    ));

    report.push_str("### Branch Name\n");
    report.push_str(&found_line(
        &findings.branch,
        "⚠️ No Jira issue found in branch name",
    ));

    report.push_str("### PR Body\n");
    report.push_str(&found_line(&findings.body, "⚠️ No Jira issue found in PR body"));

    if findings.all().len() > 1 {
        report.push_str("### ⚠️ Consistency Warning\n");
        report.push_str(
            "Multiple different Jira issues found across title, branch, and body. \
             Please ensure consistency.\n\n",
        );
    }

    if !outcomes.is_empty() {
        report.push_str("### Jira Issue Details\n");
        for outcome in outcomes {
            if outcome.valid {
                report.push_str(&format!(
                    "✅ **{}**: Valid issue and status\n",
                    outcome.issue_key
                ));
            } else {
                report.push_str(&format!(
                    "❌ **{}**: {}\n",
                    outcome.issue_key,
                    outcome.detail.as_deref().unwrap_or_default()
                ));
            }
        }
    }

    report
}

/// Render the report for a branch exempted by the skip pattern.
pub fn skipped_report(branch: &str) -> String {
    format!(
        "{}\n{}\n\n⏭️ Validation skipped for branch `{}`\n",
        REPORT_MARKER, HEADER, branch
    )
}

fn found_line(keys: &IssueKeys, missing: &str) -> String {
    if keys.is_empty() {
        format!("{}\n\n", missing)
    } else {
        format!("✅ Found Jira issue(s): {}\n\n", issues::join(keys))
    }
}

//! Validation verdict types.

use crate::error::{LintError, Result};
use crate::issues::{self, IssueKeys};
use crate::status::ValidationOutcome;

/// Value of the `status` step output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Skipped,
    Success,
    Failure,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Skipped => "skipped",
            RunStatus::Success => "success",
            RunStatus::Failure => "failure",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue keys found in each pull request field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub title: IssueKeys,
    pub branch: IssueKeys,
    pub body: IssueKeys,
}

impl Findings {
    /// Every unique key across title, branch, and body.
    pub fn all(&self) -> IssueKeys {
        issues::union([&self.title, &self.branch, &self.body])
    }
}

/// Outcome of validating one pull request.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub status: RunStatus,
    pub report: String,
    /// Why validation failed; set only for `RunStatus::Failure`.
    pub failure: Option<String>,
    /// `None` when the branch was skipped before extraction.
    pub findings: Option<Findings>,
    pub outcomes: Vec<ValidationOutcome>,
}

impl Verdict {
    pub fn skipped(report: String) -> Self {
        Self {
            status: RunStatus::Skipped,
            report,
            failure: None,
            findings: None,
            outcomes: Vec::new(),
        }
    }

    pub fn success(report: String, findings: Findings, outcomes: Vec<ValidationOutcome>) -> Self {
        Self {
            status: RunStatus::Success,
            report,
            failure: None,
            findings: Some(findings),
            outcomes,
        }
    }

    pub fn failure(
        report: String,
        message: impl Into<String>,
        findings: Findings,
        outcomes: Vec<ValidationOutcome>,
    ) -> Self {
        Self {
            status: RunStatus::Failure,
            report,
            failure: Some(message.into()),
            findings: Some(findings),
            outcomes,
        }
    }

    /// Convert into the process-level result.
    pub fn into_result(self) -> Result<()> {
        match self.failure {
            Some(message) => Err(LintError::ValidationFailure(message)),
            None => Ok(()),
        }
    }
}

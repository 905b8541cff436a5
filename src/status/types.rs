//! Status check results.

/// Result of checking one issue key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub issue_key: String,
    pub valid: bool,
    /// Checker diagnostics, present when invalid.
    pub detail: Option<String>,
}

impl ValidationOutcome {
    pub fn valid(issue_key: impl Into<String>) -> Self {
        Self {
            issue_key: issue_key.into(),
            valid: true,
            detail: None,
        }
    }

    pub fn invalid(issue_key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            issue_key: issue_key.into(),
            valid: false,
            detail: Some(detail.into()),
        }
    }
}

//! Error types for keylint.
//!
//! Uses thiserror for derive macros. Configuration errors abort before any
//! validation runs; validation failures are raised after the report and
//! status outputs have been written.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for keylint operations.
#[derive(Error, Debug)]
pub enum LintError {
    /// Credentials, event payload, or other run inputs are unusable.
    #[error("{0}")]
    ConfigError(String),

    /// The pull request failed one of the issue key checks.
    #[error("{0}")]
    ValidationFailure(String),

    /// Step outputs could not be written back to the runner.
    #[error("failed to write step output: {0}")]
    OutputError(String),
}

impl LintError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            LintError::ValidationFailure(_) => exit_codes::VALIDATION_FAILURE,
            LintError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for keylint operations.
pub type Result<T> = std::result::Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = LintError::ConfigError("GITHUB_EVENT_PATH not set".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn validation_failure_has_correct_exit_code() {
        let err = LintError::ValidationFailure("mismatch".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn output_error_has_correct_exit_code() {
        let err = LintError::OutputError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::OUTPUT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err =
            LintError::ValidationFailure("PR title must contain a valid Jira issue ID".into());
        assert_eq!(err.to_string(), "PR title must contain a valid Jira issue ID");

        let err = LintError::OutputError("permission denied".into());
        assert_eq!(
            err.to_string(),
            "failed to write step output: permission denied"
        );
    }
}

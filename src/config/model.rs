//! Config struct definition.

use super::credentials::Credentials;
use crate::cli::DEFAULT_LINT_COMMAND;
use std::path::PathBuf;

/// A program and its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for CommandLine {
    fn default() -> Self {
        Self {
            program: DEFAULT_LINT_COMMAND.to_string(),
            args: Vec::new(),
        }
    }
}

/// Immutable configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials passed to the status checker.
    pub credentials: Credentials,

    /// Base URL of the Jira instance, passed to the status checker.
    pub base_url: String,

    /// Regex of branches exempt from validation (empty: none).
    pub skip_branches: String,

    /// Whether each issue's live status is checked.
    pub validate_issue_status: bool,

    /// Status checker invocation, without the issue key.
    pub lint_command: CommandLine,

    /// Location of the GitHub event payload.
    pub event_path: Option<PathBuf>,

    /// File step outputs are appended to; `None` uses the legacy stdout command.
    pub output_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            base_url: String::new(),
            skip_branches: String::new(),
            validate_issue_status: false,
            lint_command: CommandLine::default(),
            event_path: None,
            output_file: None,
        }
    }
}

//! CLI argument parsing for keylint.
//!
//! Uses clap derive macros. Every flag is backed by the environment variable
//! GitHub Actions sets for the corresponding action input, so the binary runs
//! without arguments inside a workflow and with flags when run locally.

use clap::Parser;
use std::path::PathBuf;

/// Default executable used to check an issue's live status.
pub const DEFAULT_LINT_COMMAND: &str = "jira-lint";

/// keylint: check that a pull request references Jira issues.
///
/// Looks for issue keys in the PR title (required), branch name, and body,
/// optionally confirms each key's status with an external checker, and writes
/// a markdown report plus a status to the step outputs.
#[derive(Parser, Debug)]
#[command(name = "keylint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the GitHub event payload (JSON).
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Base64-encoded `email:token` pair for the status checker.
    #[arg(long, env = "INPUT_JIRA_TOKEN", default_value = "", hide_env_values = true)]
    pub jira_token: String,

    /// Base URL of the Jira instance.
    #[arg(long, env = "INPUT_JIRA_BASE_URL", default_value = "")]
    pub jira_base_url: String,

    /// Regex of branch names to exempt from validation.
    #[arg(long, env = "INPUT_SKIP_BRANCHES", default_value = "")]
    pub skip_branches: String,

    /// Confirm each issue's status with the external checker (true/false).
    #[arg(long, env = "INPUT_VALIDATE_ISSUE_STATUS", default_value = "false")]
    pub validate_issue_status: String,

    /// Command used to check an issue; the issue key is appended as the last argument.
    #[arg(long, env = "INPUT_LINT_COMMAND", default_value = DEFAULT_LINT_COMMAND)]
    pub lint_command: String,

    /// File that step outputs are appended to.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments and environment.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

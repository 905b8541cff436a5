//! Subprocess-backed status checker.

use super::StatusChecker;
use super::types::ValidationOutcome;
use crate::config::Config;
use std::process::Command;

/// Environment variables the checker reads its credentials from.
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const ENV_API_EMAIL: &str = "JIRA_API_EMAIL";
pub const ENV_API_URL: &str = "JIRA_API_URL";

/// Runs `<program> [args..] <ISSUE-KEY>` and reads validity from the exit code.
///
/// Exit 0 means the issue exists and is in an allowed state. A non-zero exit
/// is an invalid issue, with the checker's combined output as the detail.
/// Failing to run the program at all is also an invalid issue, with a detail
/// naming the failure.
#[derive(Debug, Clone)]
pub struct LintCommand {
    program: String,
    args: Vec<String>,
    env: Vec<(&'static str, String)>,
}

impl LintCommand {
    pub fn from_config(config: &Config) -> Self {
        Self {
            program: config.lint_command.program.clone(),
            args: config.lint_command.args.clone(),
            env: vec![
                (ENV_API_TOKEN, config.credentials.token.clone()),
                (ENV_API_EMAIL, config.credentials.email.clone()),
                (ENV_API_URL, config.base_url.clone()),
            ],
        }
    }
}

impl StatusChecker for LintCommand {
    fn check(&self, issue_key: &str) -> ValidationOutcome {
        tracing::debug!(program = %self.program, issue_key, "running status checker");

        let output = match Command::new(&self.program)
            .args(&self.args)
            .arg(issue_key)
            .envs(self.env.iter().map(|(k, v)| (*k, v.as_str())))
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                return ValidationOutcome::invalid(
                    issue_key,
                    format!("Failed to execute {}: {}", self.program, e),
                );
            }
        };

        if output.status.success() {
            return ValidationOutcome::valid(issue_key);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{}{}", stdout, stderr);

        tracing::info!(
            issue_key,
            exit_code = output.status.code().unwrap_or(-1),
            "status checker rejected issue"
        );

        ValidationOutcome::invalid(issue_key, combined.trim_end())
    }
}

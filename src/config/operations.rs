//! Building a Config from parsed CLI arguments.

use super::credentials::Credentials;
use super::model::{CommandLine, Config};
use crate::actions;
use crate::cli::Cli;
use crate::error::{LintError, Result};
use std::path::PathBuf;

impl Config {
    /// Build the run configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// * `LintError::ConfigError` - the token is not a base64 `email:token`
    ///   pair, or the lint command cannot be split into words
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let credentials = Credentials::decode(&cli.jira_token)?;

        let validate_issue_status = parse_bool(&cli.validate_issue_status).unwrap_or_else(|| {
            tracing::warn!(
                value = %cli.validate_issue_status,
                "unrecognized validate-issue-status value, treating as false"
            );
            actions::warning(&format!(
                "Unrecognized validate-issue-status value '{}', treating as false",
                cli.validate_issue_status
            ));
            false
        });

        Ok(Self {
            credentials,
            base_url: cli.jira_base_url.trim().to_string(),
            skip_branches: cli.skip_branches.clone(),
            validate_issue_status,
            lint_command: split_lint_command(&cli.lint_command)?,
            event_path: non_empty_path(cli.event_path.as_ref()),
            output_file: non_empty_path(cli.output_file.as_ref()),
        })
    }
}

/// Parse a boolean the way action inputs are usually written.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; an empty
/// value is false. Anything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "" | "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn split_lint_command(command: &str) -> Result<CommandLine> {
    let command = command.trim();
    let words = shell_words::split(command).map_err(|e| {
        LintError::ConfigError(format!(
            "failed to parse lint command: {}\nCommand: {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            e, command
        ))
    })?;

    let mut words = words.into_iter();
    match words.next() {
        Some(program) => Ok(CommandLine {
            program,
            args: words.collect(),
        }),
        None => Ok(CommandLine::default()),
    }
}

fn non_empty_path(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty()).cloned()
}

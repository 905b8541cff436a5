//! Implementation of the lint run.
//!
//! # Steps
//!
//! 1. Build the immutable config from arguments/environment
//! 2. Load the pull request from the event payload
//! 3. Apply the validation policy
//! 4. Write the `report` and `status` step outputs
//! 5. Surface a validation failure as the process result

use crate::actions::OutputSink;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::event::load_pull_request;
use crate::issues;
use crate::status::LintCommand;
use crate::validator::{RunStatus, Validator};

/// Execute one lint run.
///
/// # Exit Codes
///
/// - 0: Validation passed or the branch was skipped
/// - 1: Configuration error (no outputs written)
/// - 2: Validation failure (outputs written first)
/// - 3: Step outputs could not be written
pub fn cmd_lint(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli)?;
    let pr = load_pull_request(config.event_path.as_deref())?;

    tracing::info!(
        repository = pr.repository.as_deref().unwrap_or("unknown"),
        number = pr.number,
        branch = %pr.source_branch,
        status_checks = config.validate_issue_status,
        "validating pull request"
    );

    let checker = LintCommand::from_config(&config);
    let verdict = Validator::new(&config, &checker).validate(&pr);

    if let Some(findings) = &verdict.findings {
        tracing::debug!(
            keys = %issues::join(&findings.all()),
            checked = verdict.outcomes.len(),
            status = %verdict.status,
            "validation finished"
        );
    }

    let sink = OutputSink::from_path(config.output_file.clone());
    sink.set_output("report", &verdict.report)?;
    sink.set_output("status", verdict.status.as_str())?;

    match verdict.status {
        RunStatus::Skipped => {
            println!("Skipping validation for branch: {}", pr.source_branch);
        }
        RunStatus::Success => {
            println!("✅ All Jira validations passed successfully");
        }
        RunStatus::Failure => {}
    }

    verdict.into_result()
}

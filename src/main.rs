//! keylint: check that a pull request references Jira issues.
//!
//! This is the entry point of the GitHub Action binary. It sets up logging,
//! parses arguments (mostly from `INPUT_*` environment variables), runs the
//! checks, and maps errors to exit codes.

mod actions;
mod cli;
mod commands;
mod config;
mod error;
mod event;
mod exit_codes;
mod issues;
mod logging;
mod report;
mod skip;
mod status;
mod validator;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    match commands::cmd_lint(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Annotate the run, then repeat on stderr for local use
            actions::error(&err.to_string());
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

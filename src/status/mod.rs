//! Live issue status checks.
//!
//! The decision logic only sees the [`StatusChecker`] trait; the production
//! implementation, [`LintCommand`], shells out to an external checker once
//! per issue key.

mod command;
mod types;


pub use command::LintCommand;
pub use types::ValidationOutcome;

/// Something that can confirm an issue key exists and is in an allowed state.
pub trait StatusChecker {
    fn check(&self, issue_key: &str) -> ValidationOutcome;
}

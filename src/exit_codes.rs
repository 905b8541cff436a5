//! Exit code constants for keylint.
//!
//! - 0: Success (or skipped)
//! - 1: Configuration error (bad credentials, missing or malformed event)
//! - 2: Validation failure (missing, invalid, or mismatched issue keys)
//! - 3: Output failure (could not write step outputs)

/// Successful execution, including skipped branches.
pub const SUCCESS: i32 = 0;

/// Configuration error: the run aborted before any validation happened.
pub const CONFIG_ERROR: i32 = 1;

/// Validation failure: the pull request did not pass the issue key checks.
pub const VALIDATION_FAILURE: i32 = 2;

/// Output failure: step outputs could not be written.
pub const OUTPUT_FAILURE: i32 = 3;

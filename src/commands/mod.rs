//! Command implementations for keylint.

mod lint;

pub use lint::cmd_lint;

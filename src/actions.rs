//! GitHub Actions runner integration.
//!
//! Step outputs go to the file named by `GITHUB_OUTPUT` using the multiline
//! `name<<DELIMITER` form. Without an outputs file, the legacy
//! `::set-output` workflow command is printed instead. Annotations
//! (`::warning::`, `::error::`) are always printed to stdout.

use crate::error::{LintError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const DELIMITER_BASE: &str = "ghadelimiter_keylint";

/// Where step outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append to the runner's outputs file.
    File(PathBuf),
    /// Print `::set-output` commands to stdout.
    Legacy,
}

impl OutputSink {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputSink::File(path),
            None => OutputSink::Legacy,
        }
    }

    /// Set the step output `name` to `value`.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match self {
            OutputSink::File(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        LintError::OutputError(format!("{}: {}", path.display(), e))
                    })?;
                file.write_all(format_file_output(name, value).as_bytes())
                    .map_err(|e| LintError::OutputError(format!("{}: {}", path.display(), e)))
            }
            OutputSink::Legacy => {
                let mut stdout = std::io::stdout().lock();
                writeln!(
                    stdout,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )
                .map_err(|e| LintError::OutputError(e.to_string()))
            }
        }
    }
}

/// Render one output entry for the outputs file.
///
/// The delimiter is lengthened until it does not occur in `value`.
pub fn format_file_output(name: &str, value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Emit a warning annotation.
pub fn warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

/// Emit an error annotation.
pub fn error(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Escape a workflow command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

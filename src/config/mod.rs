//! Run configuration for keylint.
//!
//! All action inputs are read once at startup into an immutable [`Config`]
//! which is then passed down; nothing below `main` reads the process
//! environment for configuration.

mod credentials;
mod model;
mod operations;


// Re-export public API
pub use credentials::Credentials;
pub use model::{CommandLine, Config};
pub use operations::parse_bool;

//! Status checker credentials.

use crate::error::{LintError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Email and API token handed to the status checker.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Decode a base64-encoded `email:token` pair.
    ///
    /// The token itself may contain colons; only the first one separates it
    /// from the email.
    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
            LintError::ConfigError(format!(
                "failed to decode JIRA token: failed to decode base64 token: {}",
                e
            ))
        })?;

        let decoded = String::from_utf8(bytes).map_err(|_| {
            LintError::ConfigError(
                "failed to decode JIRA token: decoded token is not valid UTF-8".to_string(),
            )
        })?;

        let (email, token) = decoded.split_once(':').ok_or_else(|| {
            LintError::ConfigError(
                "failed to decode JIRA token: invalid token format, expected email:token"
                    .to_string(),
            )
        })?;

        Ok(Self {
            email: email.to_string(),
            token: token.to_string(),
        })
    }
}

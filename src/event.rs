//! GitHub event payload loading.
//!
//! Only the fields the checks need are modeled; everything else in the
//! payload is ignored.

use crate::error::{LintError, Result};
use serde::Deserialize;
use std::path::Path;

/// The subset of a GitHub webhook event keylint reads.
#[derive(Debug, Default, Deserialize)]
pub struct GitHubEvent {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub title: String,
    /// GitHub sends `null` for an empty description.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub head: Head,
}

#[derive(Debug, Default, Deserialize)]
pub struct Head {
    #[serde(default, rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
}

/// Pull request fields checked in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub source_branch: String,
    /// `owner/name`, for log context only.
    pub repository: Option<String>,
}

impl GitHubEvent {
    /// Parse an event payload.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LintError::ConfigError(format!("failed to parse event data: {}", e)))
    }

    /// Extract the pull request, failing for non pull-request events.
    pub fn into_pull_request(self) -> Result<PullRequestInfo> {
        let pr = self.pull_request.ok_or_else(|| {
            LintError::ConfigError("this action can only be run on pull requests".to_string())
        })?;

        Ok(PullRequestInfo {
            number: pr.number,
            title: pr.title,
            body: pr.body.unwrap_or_default(),
            source_branch: pr.head.git_ref,
            repository: self
                .repository
                .map(|repo| format!("{}/{}", repo.owner.login, repo.name)),
        })
    }
}

/// Read the event payload at `path` and return its pull request.
///
/// # Errors
///
/// * `LintError::ConfigError` - no path configured, unreadable file,
///   malformed JSON, or an event without a `pull_request` section
pub fn load_pull_request(path: Option<&Path>) -> Result<PullRequestInfo> {
    let path = path
        .ok_or_else(|| LintError::ConfigError("GITHUB_EVENT_PATH not set".to_string()))?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::ConfigError(format!(
            "failed to read event file '{}': {}",
            path.display(),
            e
        ))
    })?;

    GitHubEvent::from_json(&content)?.into_pull_request()
}

//! GitHub issue creation boundary.
//!
//! The publish walker consumes the [`IssueClient`] trait, so tests can
//! substitute an implementation that records calls instead of performing
//! network I/O. [`GithubClient`] is the production implementation backed by
//! the GitHub REST API.

mod client;

pub use client::GithubClient;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A GitHub repository in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(format!("expected a repository in owner/repo form, got '{s}'")),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Payload for one issue-creation call.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// A successfully created issue, as reported by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
}

/// Issue-creation failures, mapped from the GitHub API.
///
/// The publish walker treats every variant uniformly as a failed node; the
/// split exists so logs and summaries can name the cause.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server error: {0}")]
    Server(String),
}

/// Capability to create one issue in a repository.
///
/// Implemented by [`GithubClient`] for the real API and by recording fakes
/// in tests. Retry policy, if any, belongs behind this boundary; the walker
/// never retries.
#[allow(async_fn_in_trait)]
pub trait IssueClient {
    async fn create_issue(
        &self,
        repo: &RepoId,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, IssueError>;
}

//! HTTP client for the GitHub issues API.

use reqwest::{Client, StatusCode};

use super::{CreatedIssue, IssueClient, IssueError, NewIssue, RepoId};

/// Default API root for github.com.
const DEFAULT_API_ROOT: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("relprocotron/", env!("CARGO_PKG_VERSION"));

/// Issue client backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    api_root: String,
    token: String,
    client: Client,
}

impl GithubClient {
    /// Create a client for the public GitHub API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_root(DEFAULT_API_ROOT, token)
    }

    /// Create a client against a custom API root (GitHub Enterprise, tests).
    pub fn with_api_root(api_root: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Map an API response onto the issue error taxonomy.
    async fn handle_response(response: reqwest::Response) -> Result<CreatedIssue, IssueError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        // GitHub reports an exhausted rate limit as 403 with this header at
        // zero; a plain 403 is a permissions problem.
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|value| value.to_str().ok())
            .map_or(false, |remaining| remaining == "0");

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => Err(IssueError::Authentication(body)),
            StatusCode::FORBIDDEN if rate_limit_exhausted => Err(IssueError::RateLimited(body)),
            StatusCode::FORBIDDEN => Err(IssueError::Authentication(body)),
            StatusCode::TOO_MANY_REQUESTS => Err(IssueError::RateLimited(body)),
            StatusCode::NOT_FOUND => Err(IssueError::NotFound(body)),
            _ => Err(IssueError::Server(format!("{}: {}", status, body))),
        }
    }
}

impl IssueClient for GithubClient {
    async fn create_issue(
        &self,
        repo: &RepoId,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, IssueError> {
        let url = format!("{}/repos/{}/issues", self.api_root, repo);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(issue)
            .send()
            .await?;

        Self::handle_response(response).await
    }
}

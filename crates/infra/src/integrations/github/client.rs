//! GitHub REST client for repository lookups

use std::time::Duration;

use async_trait::async_trait;
use devlink_core::GithubGateway;
use devlink_domain::constants::GITHUB_REPOS_PER_PAGE;
use devlink_domain::{DevLinkError, GithubConfig, GithubRepo, Result as DomainResult};
use reqwest::Method;
use tracing::debug;

use crate::http::HttpClient;

use super::types::GithubError;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = "devlink-profile-service";

/// Client for the GitHub REST API
///
/// Performs a single attempt per lookup with a bounded timeout so a slow
/// upstream cannot stall profile reads.
pub struct GithubClient {
    http_client: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client from the GitHub section of the service config
    ///
    /// # Errors
    /// Returns `DevLinkError::Internal` if the underlying HTTP client cannot
    /// be constructed
    pub fn new(config: &GithubConfig) -> Result<Self, DevLinkError> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_attempts(1)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// List the newest public repositories for `username`
    ///
    /// GitHub sorts by creation date server-side; the page size caps the
    /// result at five entries.
    ///
    /// # Errors
    /// Returns `GithubError` for transport failures, non-success statuses
    /// (including 404 for unknown users), or undecodable bodies
    pub async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let url = self.repos_url(username);
        debug!(username, "fetching GitHub repositories");

        let mut request = self
            .http_client
            .request(Method::GET, &url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|err| GithubError::Transport(err.to_string()))?;

        let status = response.status();
        debug!(username, status = status.as_u16(), "received GitHub response");

        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
                username: username.to_string(),
            });
        }

        response
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|err| GithubError::InvalidBody(err.to_string()))
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=created&direction=desc",
            self.api_url,
            urlencoding::encode(username),
            GITHUB_REPOS_PER_PAGE
        )
    }
}

#[async_trait]
impl GithubGateway for GithubClient {
    async fn fetch_repos(&self, username: &str) -> DomainResult<Vec<GithubRepo>> {
        Ok(self.list_repos(username).await?)
    }
}

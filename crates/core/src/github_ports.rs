//! Port interface for the GitHub lookup gateway

use async_trait::async_trait;
use devlink_domain::{GithubRepo, Result};

/// Trait for fetching a user's public repositories from GitHub
#[async_trait]
pub trait GithubGateway: Send + Sync {
    /// Fetch up to five of the newest repositories for `username`.
    ///
    /// Upstream failures surface as `UpstreamUnavailable` (non-success
    /// status) or `Upstream` (transport failure); the gateway performs a
    /// single bounded-timeout attempt with no retries.
    async fn fetch_repos(&self, username: &str) -> Result<Vec<GithubRepo>>;
}

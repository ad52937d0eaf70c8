//! GitHub integration error types

use devlink_domain::DevLinkError;
use thiserror::Error;

/// Errors surfaced by the GitHub lookup gateway
#[derive(Error, Debug)]
pub enum GithubError {
    /// Request never produced a response (connect failure, timeout)
    #[error("GitHub request failed: {0}")]
    Transport(String),

    /// GitHub answered with a non-success status
    #[error("GitHub returned {status} for user '{username}'")]
    Status { status: u16, username: String },

    /// Response body could not be decoded as a repository list
    #[error("invalid GitHub response body: {0}")]
    InvalidBody(String),
}

impl From<GithubError> for DevLinkError {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::Status { .. } => DevLinkError::UpstreamUnavailable(err.to_string()),
            GithubError::Transport(_) | GithubError::InvalidBody(_) => {
                DevLinkError::Upstream(err.to_string())
            }
        }
    }
}

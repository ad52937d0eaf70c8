//! GitHub repository types

use serde::{Deserialize, Serialize};

/// One repository as returned by the GitHub lookup gateway.
///
/// Field names line up with the GitHub REST API so upstream responses
/// deserialize directly into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub id: i64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
}

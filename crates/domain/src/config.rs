//! Application configuration structures
//!
//! Deserialized from environment variables or a JSON/TOML file by the
//! infra config loader. Every section has sensible defaults so a bare
//! deployment can boot without any configuration at all.

use serde::{Deserialize, Serialize};

use crate::constants::GITHUB_REQUEST_TIMEOUT_SECS;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub github: GithubConfig,
}

/// SQLite database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "devlink.db".to_string(), pool_size: 4 }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 5000 }
    }
}

/// GitHub lookup gateway settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the GitHub REST API
    pub api_url: String,
    /// Optional bearer token for authenticated rate limits
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: GITHUB_REQUEST_TIMEOUT_SECS,
        }
    }
}

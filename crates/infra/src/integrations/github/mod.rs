//! GitHub integration for profile repository lookups
//!
//! Implements the GitHub lookup gateway: a read-only client that lists a
//! user's five newest public repositories via the GitHub REST API.
//!
//! # Architecture
//!
//! - **Client**: `GithubClient` - thin wrapper over the shared `HttpClient`
//! - **Types**: module error type plus the conversion into domain errors
//!
//! # Error Handling
//!
//! - **Transport failures** (refused connection, timeout): `Upstream`
//! - **Non-success statuses** (404 for unknown users, 5xx): `UpstreamUnavailable`
//! - Lookups are a single attempt with a bounded timeout; no retries

pub mod client;
pub mod types;

pub use client::GithubClient;
pub use types::GithubError;

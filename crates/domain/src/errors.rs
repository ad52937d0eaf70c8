//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed validation check, tied to the field that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { field: field.into(), msg: msg.into() }
    }
}

/// Main error type for DevLink
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DevLinkError {
    /// Required input missing or empty; carries every failing field.
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// No profile for the owner, or no list entry with the given id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed owner id. Reported to callers as not-found, logged
    /// distinctly here so lookups and garbage input stay separable.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Profile row removed but the identity record could not be.
    #[error("Identity delete failed: {0}")]
    IdentityDeleteFailed(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream could not be reached at all.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.msg.as_str()).collect::<Vec<_>>().join(", ")
}

/// Result type alias for DevLink operations
pub type Result<T> = std::result::Result<T, DevLinkError>;

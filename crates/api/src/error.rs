//! Error-to-response mapping for the HTTP surface
//!
//! Callers get deliberately coarse responses: validation failures list the
//! failing fields, not-found conditions come back as 400 with a short
//! message, and anything infrastructural collapses to an opaque 500. The
//! full error detail only appears in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use devlink_domain::constants::{MSG_NO_GITHUB_PROFILE, MSG_PROFILE_NOT_FOUND};
use devlink_domain::DevLinkError;
use serde_json::json;
use tracing::{error, warn};

/// Wrapper that turns a `DevLinkError` into an HTTP response
pub struct ApiError(pub DevLinkError);

/// Result alias for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl From<DevLinkError> for ApiError {
    fn from(err: DevLinkError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DevLinkError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": fields }))).into_response()
            }
            DevLinkError::NotFound(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "msg": msg }))).into_response()
            }
            DevLinkError::InvalidReference(msg) => {
                // Garbage references read as not-found to callers but are
                // logged apart from genuine misses.
                warn!(error = %msg, "rejected malformed reference");
                (StatusCode::BAD_REQUEST, Json(json!({ "msg": MSG_PROFILE_NOT_FOUND })))
                    .into_response()
            }
            DevLinkError::UpstreamUnavailable(msg) | DevLinkError::Upstream(msg) => {
                warn!(error = %msg, "GitHub lookup failed");
                (StatusCode::NOT_FOUND, Json(json!({ "msg": MSG_NO_GITHUB_PROFILE })))
                    .into_response()
            }
            err => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "msg": "Server error" })))
                    .into_response()
            }
        }
    }
}

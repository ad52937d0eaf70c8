//! Request extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use devlink_domain::constants::OWNER_ID_HEADER;
use devlink_domain::OwnerId;
use serde_json::json;

/// The acting owner, taken from the `x-user-id` request header.
///
/// The upstream authentication layer verifies credentials and forwards the
/// owner id in that header; this service trusts it. A missing or malformed
/// header rejects the request before the handler runs.
pub struct AuthenticatedOwner(pub OwnerId);

/// Rejection for requests without a usable owner header
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(json!({ "msg": "authorization required" })))
            .into_response()
    }
}

impl<S> FromRequestParts<S> for AuthenticatedOwner
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(OWNER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthRejection)?;

        let owner = OwnerId::parse(raw).map_err(|_| AuthRejection)?;

        Ok(Self(owner))
    }
}

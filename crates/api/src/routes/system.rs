//! Liveness and health endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use devlink_domain::constants::API_BANNER;
use serde_json::{json, Value};
use tracing::warn;

use crate::context::AppContext;

/// GET / - plain-text liveness banner
pub async fn banner() -> &'static str {
    API_BANNER
}

/// GET /health - reports whether the database answers queries
pub async fn health(State(ctx): State<Arc<AppContext>>) -> (StatusCode, Json<Value>) {
    match ctx.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            warn!(error = %err, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "degraded" })))
        }
    }
}

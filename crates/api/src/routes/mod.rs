//! HTTP route handlers and router assembly

pub mod profile;
pub mod system;

use std::sync::Arc;

use axum::routing::{delete, get, put};
use axum::Router;

use crate::context::AppContext;

/// Assemble the application router.
///
/// Paths mirror the public API contract: profile reads are open, profile
/// writes require the authenticated owner header.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(system::banner))
        .route("/health", get(system::health))
        .route(
            "/profile",
            get(profile::list_profiles)
                .post(profile::upsert_profile)
                .delete(profile::delete_profile),
        )
        .route("/profile/me", get(profile::get_own_profile))
        .route("/profile/user/{user_id}", get(profile::get_profile_by_owner))
        .route("/profile/experience", put(profile::add_experience))
        .route("/profile/experience/{entry_id}", delete(profile::remove_experience))
        .route("/profile/education", put(profile::add_education))
        .route("/profile/education/{entry_id}", delete(profile::remove_education))
        .route("/profile/github/{username}", get(profile::github_repos))
        .with_state(ctx)
}

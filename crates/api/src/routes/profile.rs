//! Profile aggregate routes
//!
//! Thin handlers that adapt HTTP requests onto the core `ProfileService`
//! and the GitHub gateway. All domain rules (validation, merge semantics,
//! entry identity) live in the core; this layer only extracts inputs and
//! maps results.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use devlink_domain::constants::MSG_USER_DELETED;
use devlink_domain::{
    EducationDraft, ExperienceDraft, GithubRepo, Profile, ProfileDraft, ProfileWithOwner,
};
use serde_json::{json, Value};
use tracing::info;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::extract::AuthenticatedOwner;

// =============================================================================
// Reads
// =============================================================================

/// GET /profile/me - the acting owner's profile, joined with their identity
pub async fn get_own_profile(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> ApiResult<Json<ProfileWithOwner>> {
    Ok(Json(ctx.profiles.get_own(owner).await?))
}

/// GET /profile - every profile, each joined with its owner card
pub async fn list_profiles(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<Vec<ProfileWithOwner>>> {
    Ok(Json(ctx.profiles.list_all().await?))
}

/// GET /profile/user/{user_id} - profile lookup by owner id
pub async fn get_profile_by_owner(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileWithOwner>> {
    Ok(Json(ctx.profiles.get_by_owner(&user_id).await?))
}

// =============================================================================
// Profile writes
// =============================================================================

/// POST /profile - create or merge-patch the owner's profile
pub async fn upsert_profile(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Json(draft): Json<ProfileDraft>,
) -> ApiResult<Json<Profile>> {
    info!(owner = %owner, "upserting profile");
    Ok(Json(ctx.profiles.upsert(owner, draft).await?))
}

/// DELETE /profile - remove the owner's profile and identity
pub async fn delete_profile(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> ApiResult<Json<Value>> {
    info!(owner = %owner, "deleting profile and identity");
    ctx.profiles.delete(owner).await?;
    Ok(Json(json!({ "msg": MSG_USER_DELETED })))
}

// =============================================================================
// Experience entries
// =============================================================================

/// PUT /profile/experience - prepend a new experience entry
pub async fn add_experience(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Json(draft): Json<ExperienceDraft>,
) -> ApiResult<Json<Profile>> {
    Ok(Json(ctx.profiles.add_experience(owner, draft).await?))
}

/// DELETE /profile/experience/{entry_id} - remove one experience entry
pub async fn remove_experience(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(entry_id): Path<String>,
) -> ApiResult<Json<Profile>> {
    Ok(Json(ctx.profiles.remove_experience(owner, &entry_id).await?))
}

// =============================================================================
// Education entries
// =============================================================================

/// PUT /profile/education - prepend a new education entry
pub async fn add_education(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Json(draft): Json<EducationDraft>,
) -> ApiResult<Json<Profile>> {
    Ok(Json(ctx.profiles.add_education(owner, draft).await?))
}

/// DELETE /profile/education/{entry_id} - remove one education entry
pub async fn remove_education(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(entry_id): Path<String>,
) -> ApiResult<Json<Profile>> {
    Ok(Json(ctx.profiles.remove_education(owner, &entry_id).await?))
}

// =============================================================================
// GitHub
// =============================================================================

/// GET /profile/github/{username} - newest public repositories for a user
pub async fn github_repos(
    State(ctx): State<Arc<AppContext>>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<GithubRepo>>> {
    Ok(Json(ctx.github.fetch_repos(&username).await?))
}

//! Profile aggregate service - core business logic

use std::sync::Arc;

use chrono::Utc;
use devlink_domain::constants::{MSG_NO_OWN_PROFILE, MSG_PROFILE_NOT_FOUND};
use devlink_domain::{
    DevLinkError, EducationDraft, ExperienceDraft, OwnerId, Profile, ProfileDraft,
    ProfileWithOwner, Result, SocialLinks,
};
use tracing::{debug, error};
use uuid::Uuid;

use super::ports::{IdentityStore, OwnerDirectory, ProfileRepository};
use super::validate;

/// Profile aggregate service
///
/// Owns profile documents end to end: create-or-update semantics, the
/// ordered experience/education sub-lists, the cascading delete, and the
/// owner-card join on reads.
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    directory: Arc<dyn OwnerDirectory>,
    identities: Arc<dyn IdentityStore>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        directory: Arc<dyn OwnerDirectory>,
        identities: Arc<dyn IdentityStore>,
    ) -> Self {
        Self { profiles, directory, identities }
    }

    /// Get the caller's own profile, joined with their owner card.
    pub async fn get_own(&self, owner: OwnerId) -> Result<ProfileWithOwner> {
        match self.profiles.find_by_owner(owner).await? {
            Some(profile) => self.join_owner(profile).await,
            None => Err(DevLinkError::NotFound(MSG_NO_OWN_PROFILE.to_string())),
        }
    }

    /// Get every profile, each joined with its owner card.
    pub async fn list_all(&self) -> Result<Vec<ProfileWithOwner>> {
        let profiles = self.profiles.list_all().await?;
        futures::future::try_join_all(profiles.into_iter().map(|p| self.join_owner(p))).await
    }

    /// Get the profile owned by the user named in `raw` (an owner id in
    /// text form, straight from the URL path).
    pub async fn get_by_owner(&self, raw: &str) -> Result<ProfileWithOwner> {
        let owner = OwnerId::parse(raw)?;
        match self.profiles.find_by_owner(owner).await? {
            Some(profile) => self.join_owner(profile).await,
            None => Err(DevLinkError::NotFound(MSG_PROFILE_NOT_FOUND.to_string())),
        }
    }

    /// Create the caller's profile, or merge the draft into it when one
    /// already exists.
    ///
    /// Fields the draft leaves unset (or set to the empty string) keep
    /// their stored values; provided fields are replaced wholesale. The
    /// find-then-branch here can race with itself for the same owner; the
    /// store's owner uniqueness constraint turns that race into a failed
    /// insert instead of a duplicate profile.
    pub async fn upsert(&self, owner: OwnerId, draft: ProfileDraft) -> Result<Profile> {
        validate::check_profile_draft(&draft)?;
        let now = Utc::now().timestamp();

        match self.profiles.find_by_owner(owner).await? {
            Some(mut profile) => {
                apply_draft(&mut profile, draft, now);
                self.profiles.update(profile.clone()).await?;
                Ok(profile)
            }
            None => {
                let mut profile = Profile::new(owner, now);
                apply_draft(&mut profile, draft, now);
                self.profiles.insert(profile.clone()).await?;
                Ok(profile)
            }
        }
    }

    /// Delete the caller's profile and their identity record.
    ///
    /// Two separate store operations with no compensating transaction:
    /// when the identity removal fails after the profile is already gone,
    /// the orphaned identity is reported as `IdentityDeleteFailed` rather
    /// than hidden.
    pub async fn delete(&self, owner: OwnerId) -> Result<()> {
        self.profiles.delete_by_owner(owner).await?;
        if let Err(err) = self.identities.remove_identity(owner).await {
            error!(
                owner = %owner,
                error = %err,
                "Profile removed but identity delete failed; identity record is orphaned"
            );
            return Err(DevLinkError::IdentityDeleteFailed(format!(
                "identity record for {owner} could not be removed"
            )));
        }
        Ok(())
    }

    /// Add a work experience entry to the front of the caller's list.
    pub async fn add_experience(&self, owner: OwnerId, draft: ExperienceDraft) -> Result<Profile> {
        let entry = validate::build_experience(draft)?;
        let mut profile = self.require_profile(owner).await?;
        profile.push_experience(entry);
        profile.updated_at = Utc::now().timestamp();
        self.profiles.update(profile.clone()).await?;
        Ok(profile)
    }

    /// Add an education entry to the front of the caller's list.
    pub async fn add_education(&self, owner: OwnerId, draft: EducationDraft) -> Result<Profile> {
        let entry = validate::build_education(draft)?;
        let mut profile = self.require_profile(owner).await?;
        profile.push_education(entry);
        profile.updated_at = Utc::now().timestamp();
        self.profiles.update(profile.clone()).await?;
        Ok(profile)
    }

    /// Remove the experience entry named by `raw_entry_id`.
    ///
    /// A malformed or unknown entry id leaves the list untouched and
    /// reports not-found; nothing is persisted in that case.
    pub async fn remove_experience(&self, owner: OwnerId, raw_entry_id: &str) -> Result<Profile> {
        let mut profile = self.require_profile(owner).await?;
        let removed = Uuid::parse_str(raw_entry_id)
            .ok()
            .is_some_and(|id| profile.remove_experience_entry(id));
        if !removed {
            return Err(DevLinkError::NotFound("Experience entry not found".to_string()));
        }
        profile.updated_at = Utc::now().timestamp();
        self.profiles.update(profile.clone()).await?;
        Ok(profile)
    }

    /// Remove the education entry named by `raw_entry_id`.
    ///
    /// Same contract as [`Self::remove_experience`].
    pub async fn remove_education(&self, owner: OwnerId, raw_entry_id: &str) -> Result<Profile> {
        let mut profile = self.require_profile(owner).await?;
        let removed = Uuid::parse_str(raw_entry_id)
            .ok()
            .is_some_and(|id| profile.remove_education_entry(id));
        if !removed {
            return Err(DevLinkError::NotFound("Education entry not found".to_string()));
        }
        profile.updated_at = Utc::now().timestamp();
        self.profiles.update(profile.clone()).await?;
        Ok(profile)
    }

    async fn require_profile(&self, owner: OwnerId) -> Result<Profile> {
        self.profiles
            .find_by_owner(owner)
            .await?
            .ok_or_else(|| DevLinkError::NotFound(MSG_NO_OWN_PROFILE.to_string()))
    }

    async fn join_owner(&self, profile: Profile) -> Result<ProfileWithOwner> {
        let owner = self.directory.project_owner_fields(profile.owner_id).await?;
        if owner.is_none() {
            debug!(owner = %profile.owner_id, "No identity record for profile owner");
        }
        Ok(ProfileWithOwner { profile, owner })
    }
}

/// Overlay the provided draft fields onto `profile`.
fn apply_draft(profile: &mut Profile, draft: ProfileDraft, now: i64) {
    if let Some(status) = provided(draft.status) {
        profile.status = status;
    }
    if let Some(raw) = provided(draft.skills) {
        profile.skills = split_skills(&raw);
    }
    if let Some(company) = provided(draft.company) {
        profile.company = Some(company);
    }
    if let Some(website) = provided(draft.website) {
        profile.website = Some(website);
    }
    if let Some(location) = provided(draft.location) {
        profile.location = Some(location);
    }
    if let Some(bio) = provided(draft.bio) {
        profile.bio = Some(bio);
    }
    if let Some(github_username) = provided(draft.github_username) {
        profile.github_username = Some(github_username);
    }
    profile.social.merge(SocialLinks {
        youtube: provided(draft.youtube),
        facebook: provided(draft.facebook),
        twitter: provided(draft.twitter),
        instagram: provided(draft.instagram),
        linkedin: provided(draft.linkedin),
    });
    profile.updated_at = now;
}

/// Treat the empty string the same as an absent field.
fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Split a comma-separated skills string into trimmed items. Empty items
/// survive ("a,,b" yields three entries); deduplication is not attempted.
fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

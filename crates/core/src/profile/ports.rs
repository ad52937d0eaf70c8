//! Port interfaces for profile aggregate management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile operations.

use async_trait::async_trait;
use devlink_domain::{OwnerCard, OwnerId, Profile, Result};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get the profile owned by `owner_id`
    async fn find_by_owner(&self, owner_id: OwnerId) -> Result<Option<Profile>>;

    /// Get every stored profile
    async fn list_all(&self) -> Result<Vec<Profile>>;

    /// Create a new profile.
    ///
    /// The store enforces owner uniqueness: inserting a second profile
    /// for the same owner fails rather than silently duplicating, which
    /// closes the find-then-create race in the upsert path.
    async fn insert(&self, profile: Profile) -> Result<()>;

    /// Replace an existing profile
    async fn update(&self, profile: Profile) -> Result<()>;

    /// Delete the profile owned by `owner_id`. Idempotent: deleting an
    /// absent profile succeeds.
    async fn delete_by_owner(&self, owner_id: OwnerId) -> Result<()>;
}

/// Trait for projecting display fields out of identity records
#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    /// Look up the display card (name, avatar) for an owner. Returns
    /// `None` when no identity record exists.
    async fn project_owner_fields(&self, owner_id: OwnerId) -> Result<Option<OwnerCard>>;
}

/// Trait for removing identity records during cascading delete
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Remove the identity record for `owner_id`. Idempotent: removing
    /// an absent identity succeeds.
    async fn remove_identity(&self, owner_id: OwnerId) -> Result<()>;
}

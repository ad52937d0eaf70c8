//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core ports, enabling deterministic
//! unit tests without database dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use devlink_core::{IdentityStore, OwnerDirectory, ProfileRepository};
use devlink_domain::{DevLinkError, OwnerCard, OwnerId, Profile, Result as DomainResult};

/// In-memory mock for `ProfileRepository`.
///
/// Backed by a plain map keyed by owner id, which gives the owner
/// uniqueness constraint for free: inserting twice for the same owner
/// fails the way the real store does.
#[derive(Default, Clone)]
pub struct MockProfileRepository {
    profiles: Arc<Mutex<HashMap<OwnerId, Profile>>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// Read a stored profile directly, bypassing the service.
    pub fn stored(&self, owner: OwnerId) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&owner).cloned()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_owner(&self, owner_id: OwnerId) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(&owner_id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> =
            self.profiles.lock().unwrap().values().cloned().collect();
        profiles.sort_by_key(|p| (p.created_at, p.owner_id));
        Ok(profiles)
    }

    async fn insert(&self, profile: Profile) -> DomainResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.contains_key(&profile.owner_id) {
            return Err(DevLinkError::Store("unique constraint violation".to_string()));
        }
        profiles.insert(profile.owner_id, profile);
        Ok(())
    }

    async fn update(&self, profile: Profile) -> DomainResult<()> {
        self.profiles.lock().unwrap().insert(profile.owner_id, profile);
        Ok(())
    }

    async fn delete_by_owner(&self, owner_id: OwnerId) -> DomainResult<()> {
        self.profiles.lock().unwrap().remove(&owner_id);
        Ok(())
    }
}

/// In-memory mock for `OwnerDirectory`.
#[derive(Default, Clone)]
pub struct MockOwnerDirectory {
    cards: Arc<Mutex<HashMap<OwnerId, OwnerCard>>>,
}

impl MockOwnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper for seeding an owner card.
    pub fn with_card(self, owner: OwnerId, name: &str, avatar: Option<&str>) -> Self {
        self.cards.lock().unwrap().insert(
            owner,
            OwnerCard { name: name.to_string(), avatar: avatar.map(str::to_string) },
        );
        self
    }
}

#[async_trait]
impl OwnerDirectory for MockOwnerDirectory {
    async fn project_owner_fields(&self, owner_id: OwnerId) -> DomainResult<Option<OwnerCard>> {
        Ok(self.cards.lock().unwrap().get(&owner_id).cloned())
    }
}

/// In-memory mock for `IdentityStore` that records removals and can be
/// told to fail, for exercising the cascading-delete gap.
#[derive(Default, Clone)]
pub struct MockIdentityStore {
    fail_removals: Arc<AtomicBool>,
    removed: Arc<Mutex<Vec<OwnerId>>>,
}

impl MockIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent removal fail with a store error.
    pub fn failing(self) -> Self {
        self.fail_removals.store(true, Ordering::SeqCst);
        self
    }

    /// Owners whose identity records were removed, in order.
    pub fn removed(&self) -> Vec<OwnerId> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityStore for MockIdentityStore {
    async fn remove_identity(&self, owner_id: OwnerId) -> DomainResult<()> {
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(DevLinkError::Store("identity table unavailable".to_string()));
        }
        self.removed.lock().unwrap().push(owner_id);
        Ok(())
    }
}

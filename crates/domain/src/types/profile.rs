//! Profile aggregate types
//!
//! A `Profile` is the per-user document at the center of DevLink: scalar
//! career fields, a skills list, social links, and two ordered embedded
//! lists (experience, education). Entries in those lists carry stable
//! server-assigned ids; ordering is newest-first.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DevLinkError, Result};
use crate::types::identity::OwnerCard;

/// Identifier of the user that owns a profile.
///
/// Wraps a UUID so malformed external input is rejected at the boundary
/// instead of leaking into queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    /// Mint a fresh owner id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an owner id from caller-supplied text.
    ///
    /// # Errors
    /// Returns `DevLinkError::InvalidReference` when the text is not a
    /// valid UUID.
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| DevLinkError::InvalidReference(format!("malformed owner id: {raw}")))
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OwnerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Social media links attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// Overlay `patch` onto `self`, keeping existing values for fields the
    /// patch leaves unset.
    pub fn merge(&mut self, patch: SocialLinks) {
        if patch.youtube.is_some() {
            self.youtube = patch.youtube;
        }
        if patch.facebook.is_some() {
            self.facebook = patch.facebook;
        }
        if patch.twitter.is_some() {
            self.twitter = patch.twitter;
        }
        if patch.instagram.is_some() {
            self.instagram = patch.instagram;
        }
        if patch.linkedin.is_some() {
            self.linkedin = patch.linkedin;
        }
    }
}

/// One work experience entry embedded in a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Server-assigned, immutable for the lifetime of the entry
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// One education entry embedded in a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Server-assigned, immutable for the lifetime of the entry
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Per-user profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub owner_id: OwnerId,
    pub status: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    /// Newest-first
    pub experience: Vec<ExperienceEntry>,
    /// Newest-first
    pub education: Vec<EducationEntry>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Profile {
    /// Create an empty profile shell for `owner_id`; required fields are
    /// filled in by the caller's patch before the profile is persisted.
    pub fn new(owner_id: OwnerId, now: i64) -> Self {
        Self {
            owner_id,
            status: String::new(),
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Prepend an experience entry so the listing stays newest-first.
    pub fn push_experience(&mut self, entry: ExperienceEntry) {
        self.experience.insert(0, entry);
    }

    /// Prepend an education entry so the listing stays newest-first.
    pub fn push_education(&mut self, entry: EducationEntry) {
        self.education.insert(0, entry);
    }

    /// Remove the experience entry with the given id. Returns `false`
    /// (and leaves the list untouched) when no entry matches.
    pub fn remove_experience_entry(&mut self, id: Uuid) -> bool {
        match self.experience.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the education entry with the given id. Returns `false`
    /// (and leaves the list untouched) when no entry matches.
    pub fn remove_education_entry(&mut self, id: Uuid) -> bool {
        match self.education.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Caller-supplied profile fields for the create-or-update operation.
///
/// Everything is optional at the type level; which fields are actually
/// required is a service-level validation concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub status: Option<String>,
    pub skills: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// Caller-supplied fields for a new experience entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Caller-supplied fields for a new education entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationDraft {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// A profile joined with display fields from its owning identity.
///
/// `owner` is absent when the identity record is missing; the profile is
/// still returned rather than dropped from listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileWithOwner {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerCard>,
}

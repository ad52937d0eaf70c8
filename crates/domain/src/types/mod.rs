//! Domain types and models

pub mod github;
pub mod identity;
pub mod profile;

pub use github::GithubRepo;
pub use identity::{Identity, OwnerCard};
pub use profile::{
    EducationDraft, EducationEntry, ExperienceDraft, ExperienceEntry, OwnerId, Profile,
    ProfileDraft, ProfileWithOwner, SocialLinks,
};

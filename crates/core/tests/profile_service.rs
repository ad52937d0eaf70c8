//! Integration tests for the profile aggregate service.
//!
//! Exercises create-or-update semantics, the ordered experience and
//! education lists, the cascading delete, and the owner-card join,
//! against in-memory ports.

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use devlink_core::{ProfileRepository, ProfileService};
use devlink_domain::constants::{MSG_NO_OWN_PROFILE, MSG_PROFILE_NOT_FOUND};
use devlink_domain::{DevLinkError, EducationDraft, ExperienceDraft, OwnerId, Profile, ProfileDraft};
use support::repositories::{MockIdentityStore, MockOwnerDirectory, MockProfileRepository};

struct Harness {
    service: ProfileService,
    profiles: MockProfileRepository,
    identities: MockIdentityStore,
}

fn harness() -> Harness {
    harness_with(MockOwnerDirectory::new(), MockIdentityStore::new())
}

fn harness_with(directory: MockOwnerDirectory, identities: MockIdentityStore) -> Harness {
    let profiles = MockProfileRepository::new();
    let service = ProfileService::new(
        Arc::new(profiles.clone()),
        Arc::new(directory),
        Arc::new(identities.clone()),
    );
    Harness { service, profiles, identities }
}

fn base_draft() -> ProfileDraft {
    ProfileDraft {
        status: Some("Developer".to_string()),
        skills: Some("rust, sql".to_string()),
        ..Default::default()
    }
}

fn experience(title: &str) -> ExperienceDraft {
    ExperienceDraft {
        title: Some(title.to_string()),
        company: Some("Acme".to_string()),
        from: NaiveDate::from_ymd_opt(2020, 1, 1),
        ..Default::default()
    }
}

fn education(school: &str) -> EducationDraft {
    EducationDraft {
        school: Some(school.to_string()),
        degree: Some("BSc".to_string()),
        field_of_study: Some("Computer Science".to_string()),
        from: NaiveDate::from_ymd_opt(2016, 9, 1),
        ..Default::default()
    }
}

// ============================================================================
// Create-or-update
// ============================================================================

#[tokio::test]
async fn upsert_creates_profile_on_first_write() {
    let h = harness();
    let owner = OwnerId::new();

    let profile = h.service.upsert(owner, base_draft()).await.expect("first write should create");

    assert_eq!(profile.owner_id, owner);
    assert_eq!(profile.status, "Developer");
    assert_eq!(profile.skills, vec!["rust", "sql"]);
    assert_eq!(profile.created_at, profile.updated_at);
    assert_eq!(h.profiles.count(), 1);
}

#[tokio::test]
async fn upsert_merges_draft_into_existing_profile() {
    let h = harness();
    let owner = OwnerId::new();

    let first = ProfileDraft {
        bio: Some("keeps this bio".to_string()),
        company: Some("Acme".to_string()),
        ..base_draft()
    };
    let created = h.service.upsert(owner, first).await.expect("create should succeed");

    let second = ProfileDraft {
        status: Some("Architect".to_string()),
        skills: Some("go".to_string()),
        ..Default::default()
    };
    let updated = h.service.upsert(owner, second).await.expect("update should succeed");

    assert_eq!(updated.status, "Architect");
    assert_eq!(updated.skills, vec!["go"]);
    assert_eq!(updated.bio.as_deref(), Some("keeps this bio"));
    assert_eq!(updated.company.as_deref(), Some("Acme"));
    assert_eq!(updated.created_at, created.created_at, "create timestamp must not move");
    assert_eq!(h.profiles.count(), 1, "update must not create a second profile");
}

#[tokio::test]
async fn upsert_treats_empty_strings_as_omitted() {
    let h = harness();
    let owner = OwnerId::new();

    let first = ProfileDraft { website: Some("https://old.example".to_string()), ..base_draft() };
    h.service.upsert(owner, first).await.expect("create should succeed");

    let second = ProfileDraft { website: Some(String::new()), ..base_draft() };
    let updated = h.service.upsert(owner, second).await.expect("update should succeed");

    assert_eq!(updated.website.as_deref(), Some("https://old.example"));
}

#[tokio::test]
async fn upsert_merges_social_links_field_by_field() {
    let h = harness();
    let owner = OwnerId::new();

    let first = ProfileDraft { twitter: Some("@first".to_string()), ..base_draft() };
    h.service.upsert(owner, first).await.expect("create should succeed");

    let second = ProfileDraft { youtube: Some("yt-channel".to_string()), ..base_draft() };
    let updated = h.service.upsert(owner, second).await.expect("update should succeed");

    assert_eq!(updated.social.twitter.as_deref(), Some("@first"));
    assert_eq!(updated.social.youtube.as_deref(), Some("yt-channel"));
}

#[tokio::test]
async fn upsert_rejects_missing_status_and_skills_before_touching_store() {
    let h = harness();

    let err = h.service.upsert(OwnerId::new(), ProfileDraft::default()).await.unwrap_err();

    let DevLinkError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    let msgs: Vec<_> = errors.iter().map(|e| e.msg.as_str()).collect();
    assert_eq!(msgs, vec!["Status is required", "Skills is required"]);
    assert_eq!(h.profiles.count(), 0, "validation failure must not write");
}

#[tokio::test]
async fn duplicate_create_for_same_owner_is_rejected_by_store() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    // A racing create that lost the find-then-branch race hits the owner
    // uniqueness constraint instead of duplicating the profile.
    let racing = Profile::new(owner, 0);
    let err = h.profiles.insert(racing).await.unwrap_err();
    assert!(matches!(err, DevLinkError::Store(_)));
    assert_eq!(h.profiles.count(), 1);
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn get_own_reports_missing_profile() {
    let h = harness();

    let err = h.service.get_own(OwnerId::new()).await.unwrap_err();

    match err {
        DevLinkError::NotFound(msg) => assert_eq!(msg, MSG_NO_OWN_PROFILE),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn get_own_joins_owner_card() {
    let owner = OwnerId::new();
    let directory = MockOwnerDirectory::new().with_card(owner, "Eve", Some("avatar-url"));
    let h = harness_with(directory, MockIdentityStore::new());
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    let joined = h.service.get_own(owner).await.expect("profile should be readable");

    let card = joined.owner.expect("owner card should be joined in");
    assert_eq!(card.name, "Eve");
    assert_eq!(card.avatar.as_deref(), Some("avatar-url"));
}

#[tokio::test]
async fn get_by_owner_reports_unknown_owner_as_not_found() {
    let h = harness();

    let err = h.service.get_by_owner(&OwnerId::new().to_string()).await.unwrap_err();

    match err {
        DevLinkError::NotFound(msg) => assert_eq!(msg, MSG_PROFILE_NOT_FOUND),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn get_by_owner_distinguishes_malformed_ids_internally() {
    let h = harness();

    let err = h.service.get_by_owner("no-such-uuid").await.unwrap_err();

    assert!(matches!(err, DevLinkError::InvalidReference(_)));
}

#[tokio::test]
async fn list_all_keeps_profiles_whose_identity_is_missing() {
    let with_card = OwnerId::new();
    let without_card = OwnerId::new();
    let directory = MockOwnerDirectory::new().with_card(with_card, "Eve", None);
    let h = harness_with(directory, MockIdentityStore::new());
    h.service.upsert(with_card, base_draft()).await.expect("create should succeed");
    h.service.upsert(without_card, base_draft()).await.expect("create should succeed");

    let listed = h.service.list_all().await.expect("listing should succeed");

    assert_eq!(listed.len(), 2);
    let find = |owner: OwnerId| {
        listed.iter().find(|p| p.profile.owner_id == owner).expect("profile should be listed")
    };
    assert!(find(with_card).owner.is_some());
    assert!(find(without_card).owner.is_none(), "missing identity must not drop the profile");
}

// ============================================================================
// Experience and education lists
// ============================================================================

#[tokio::test]
async fn add_experience_prepends_newest_first() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    h.service.add_experience(owner, experience("first job")).await.expect("add should succeed");
    let profile =
        h.service.add_experience(owner, experience("second job")).await.expect("add should succeed");

    let titles: Vec<_> = profile.experience.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["second job", "first job"]);
}

#[tokio::test]
async fn add_experience_requires_an_existing_profile() {
    let h = harness();

    let err = h.service.add_experience(OwnerId::new(), experience("job")).await.unwrap_err();

    match err {
        DevLinkError::NotFound(msg) => assert_eq!(msg, MSG_NO_OWN_PROFILE),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn add_experience_reports_every_missing_field() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    let err = h.service.add_experience(owner, ExperienceDraft::default()).await.unwrap_err();

    let DevLinkError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 3);
}

#[tokio::test]
async fn remove_experience_removes_only_the_named_entry() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");
    h.service.add_experience(owner, experience("a")).await.expect("add should succeed");
    let with_b = h.service.add_experience(owner, experience("b")).await.expect("add should succeed");
    h.service.add_experience(owner, experience("c")).await.expect("add should succeed");
    let b_id = with_b.experience[0].id;

    let profile = h
        .service
        .remove_experience(owner, &b_id.to_string())
        .await
        .expect("removal should succeed");

    let titles: Vec<_> = profile.experience.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a"], "only the named entry goes, order of the rest holds");
    let stored = h.profiles.stored(owner).expect("profile should persist");
    assert_eq!(stored.experience.len(), 2, "removal should be persisted");
}

#[tokio::test]
async fn remove_experience_with_unknown_id_leaves_list_untouched() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");
    h.service.add_experience(owner, experience("only")).await.expect("add should succeed");

    let err = h
        .service
        .remove_experience(owner, &uuid::Uuid::new_v4().to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, DevLinkError::NotFound(_)));
    let stored = h.profiles.stored(owner).expect("profile should persist");
    assert_eq!(stored.experience.len(), 1);
}

#[tokio::test]
async fn remove_experience_with_malformed_id_reports_not_found() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    let err = h.service.remove_experience(owner, "not-a-uuid").await.unwrap_err();

    assert!(matches!(err, DevLinkError::NotFound(_)));
}

#[tokio::test]
async fn education_list_follows_the_same_lifecycle() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    let first = h.service.add_education(owner, education("State U")).await.expect("add education");
    h.service.add_education(owner, education("Tech Institute")).await.expect("add education");
    let first_id = first.education[0].id;

    let profile = h
        .service
        .remove_education(owner, &first_id.to_string())
        .await
        .expect("removal should succeed");

    assert_eq!(profile.education.len(), 1);
    assert_eq!(profile.education[0].school, "Tech Institute");
}

#[tokio::test]
async fn entry_ids_stay_stable_across_profile_updates() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");
    let with_entry =
        h.service.add_experience(owner, experience("job")).await.expect("add should succeed");
    let entry_id = with_entry.experience[0].id;

    let updated = h.service.upsert(owner, base_draft()).await.expect("update should succeed");

    assert_eq!(updated.experience[0].id, entry_id);
}

// ============================================================================
// Cascading delete
// ============================================================================

#[tokio::test]
async fn delete_removes_profile_then_identity() {
    let h = harness();
    let owner = OwnerId::new();
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    h.service.delete(owner).await.expect("delete should succeed");

    assert_eq!(h.profiles.count(), 0);
    assert_eq!(h.identities.removed(), vec![owner]);
}

#[tokio::test]
async fn delete_without_profile_still_removes_identity() {
    let h = harness();
    let owner = OwnerId::new();

    h.service.delete(owner).await.expect("delete should be idempotent");

    assert_eq!(h.identities.removed(), vec![owner]);
}

#[tokio::test]
async fn delete_surfaces_identity_failure_as_distinct_error() {
    let owner = OwnerId::new();
    let h = harness_with(MockOwnerDirectory::new(), MockIdentityStore::new().failing());
    h.service.upsert(owner, base_draft()).await.expect("create should succeed");

    let err = h.service.delete(owner).await.unwrap_err();

    assert!(matches!(err, DevLinkError::IdentityDeleteFailed(_)));
    assert_eq!(h.profiles.count(), 0, "profile removal already happened");
}

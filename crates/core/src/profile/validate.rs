//! Validation rules for profile writes
//!
//! Validation runs before any store access and reports every failing
//! field, not just the first. A field set to the empty string counts as
//! missing; whitespace-only values pass, matching the caller contract.

use chrono::NaiveDate;
use devlink_domain::{
    DevLinkError, EducationDraft, EducationEntry, ExperienceDraft, ExperienceEntry, FieldError,
    ProfileDraft, Result,
};
use uuid::Uuid;

/// Check the create-or-update draft for required fields.
pub fn check_profile_draft(draft: &ProfileDraft) -> Result<()> {
    let mut errors = Vec::new();
    if is_blank(&draft.status) {
        errors.push(FieldError::new("status", "Status is required"));
    }
    if is_blank(&draft.skills) {
        errors.push(FieldError::new("skills", "Skills is required"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DevLinkError::Validation(errors))
    }
}

/// Build a new experience entry from a draft, minting its id.
///
/// # Errors
/// Returns `DevLinkError::Validation` listing every missing required
/// field (title, company, from).
pub fn build_experience(draft: ExperienceDraft) -> Result<ExperienceEntry> {
    let mut errors = Vec::new();
    let title = require_text(draft.title, "title", "Title is required", &mut errors);
    let company = require_text(draft.company, "company", "Company is required", &mut errors);
    let from = require_date(draft.from, "from", "From date is required", &mut errors);

    match (title, company, from) {
        (Some(title), Some(company), Some(from)) => Ok(ExperienceEntry {
            id: Uuid::new_v4(),
            title,
            company,
            location: draft.location,
            from,
            to: draft.to,
            current: draft.current,
            description: draft.description,
        }),
        _ => Err(DevLinkError::Validation(errors)),
    }
}

/// Build a new education entry from a draft, minting its id.
///
/// # Errors
/// Returns `DevLinkError::Validation` listing every missing required
/// field (school, degree, field_of_study, from).
pub fn build_education(draft: EducationDraft) -> Result<EducationEntry> {
    let mut errors = Vec::new();
    let school = require_text(draft.school, "school", "School is required", &mut errors);
    let degree = require_text(draft.degree, "degree", "Degree is required", &mut errors);
    let field_of_study = require_text(
        draft.field_of_study,
        "field_of_study",
        "Field of study is required",
        &mut errors,
    );
    let from = require_date(draft.from, "from", "From date is required", &mut errors);

    match (school, degree, field_of_study, from) {
        (Some(school), Some(degree), Some(field_of_study), Some(from)) => Ok(EducationEntry {
            id: Uuid::new_v4(),
            school,
            degree,
            field_of_study,
            from,
            to: draft.to,
            current: draft.current,
            description: draft.description,
        }),
        _ => Err(DevLinkError::Validation(errors)),
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn require_text(
    value: Option<String>,
    field: &str,
    msg: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(FieldError::new(field, msg));
            None
        }
    }
}

fn require_date(
    value: Option<NaiveDate>,
    field: &str,
    msg: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    if value.is_none() {
        errors.push(FieldError::new(field, msg));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_draft_reports_every_missing_field() {
        let err = check_profile_draft(&ProfileDraft::default()).unwrap_err();
        let DevLinkError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["status", "skills"]);
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let draft = ProfileDraft {
            status: Some(String::new()),
            skills: Some("rust".to_string()),
            ..Default::default()
        };
        let err = check_profile_draft(&draft).unwrap_err();
        let DevLinkError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Status is required");
    }

    #[test]
    fn whitespace_only_value_passes() {
        let draft = ProfileDraft {
            status: Some(" ".to_string()),
            skills: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(check_profile_draft(&draft).is_ok());
    }

    #[test]
    fn experience_requires_title_company_and_from() {
        let err = build_experience(ExperienceDraft::default()).unwrap_err();
        let DevLinkError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let msgs: Vec<_> = errors.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, vec!["Title is required", "Company is required", "From date is required"]);
    }

    #[test]
    fn education_requires_four_fields() {
        let err = build_education(EducationDraft::default()).unwrap_err();
        let DevLinkError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[2].msg, "Field of study is required");
    }

    #[test]
    fn built_entries_get_distinct_ids() {
        let draft = ExperienceDraft {
            title: Some("Developer".to_string()),
            company: Some("Acme".to_string()),
            from: NaiveDate::from_ymd_opt(2021, 3, 1),
            ..Default::default()
        };
        let a = build_experience(draft.clone()).unwrap();
        let b = build_experience(draft).unwrap();
        assert_ne!(a.id, b.id);
    }
}

//! Profile repository implementation using SQLite
//!
//! Persists profile documents as one row per owner; the list-valued
//! fields (skills, social, experience, education) are stored as JSON
//! text and decoded on read.

use std::sync::Arc;

use async_trait::async_trait;
use devlink_core::ProfileRepository as ProfileRepositoryPort;
use devlink_domain::{DevLinkError, OwnerId, Profile, Result as DomainResult};
use rusqlite::types::Type;
use rusqlite::{params, Row, ToSql};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::task;
use uuid::Uuid;

use super::manager::{DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn find_by_owner(&self, owner_id: OwnerId) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let owner = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT owner_id, status, company, website, location, bio, github_username,
                        skills, social, experience, education, created_at, updated_at
                 FROM profiles WHERE owner_id = ?1",
                params![&owner],
                map_profile_row,
            );

            match result {
                Ok(profile) => Ok(Some(profile)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Profile>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(
                    "SELECT owner_id, status, company, website, location, bio, github_username,
                            skills, social, experience, education, created_at, updated_at
                     FROM profiles
                     ORDER BY created_at ASC, owner_id ASC",
                )
                .map_err(map_sql_error)?;
            let rows = stmt.query_map([], map_profile_row).map_err(map_sql_error)?;

            let mut profiles = Vec::new();
            for row in rows {
                profiles.push(row.map_err(map_sql_error)?);
            }
            Ok(profiles)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_profile(&conn, &profile)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            update_profile(&conn, &profile)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_by_owner(&self, owner_id: OwnerId) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let owner = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM profiles WHERE owner_id = ?1", params![&owner])
                .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a Profile
fn map_profile_row(row: &Row) -> rusqlite::Result<Profile> {
    let owner_raw: String = row.get(0)?;
    Ok(Profile {
        owner_id: parse_owner_column(0, &owner_raw)?,
        status: row.get(1)?,
        company: row.get(2)?,
        website: row.get(3)?,
        location: row.get(4)?,
        bio: row.get(5)?,
        github_username: row.get(6)?,
        skills: parse_json_column(7, &row.get::<_, String>(7)?)?,
        social: parse_json_column(8, &row.get::<_, String>(8)?)?,
        experience: parse_json_column(9, &row.get::<_, String>(9)?)?,
        education: parse_json_column(10, &row.get::<_, String>(10)?)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

fn parse_owner_column(idx: usize, raw: &str) -> rusqlite::Result<OwnerId> {
    Uuid::parse_str(raw)
        .map(OwnerId::from)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn parse_json_column<T: DeserializeOwned>(idx: usize, raw: &str) -> rusqlite::Result<T> {
    serde_json::from_str(raw)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn encode_json<T: Serialize>(value: &T) -> DomainResult<String> {
    serde_json::to_string(value)
        .map_err(|err| DevLinkError::Store(format!("failed to encode profile field: {err}")))
}

/// Insert a profile
fn insert_profile(conn: &DbConnection, profile: &Profile) -> DomainResult<()> {
    let owner_id = profile.owner_id.to_string();
    let skills = encode_json(&profile.skills)?;
    let social = encode_json(&profile.social)?;
    let experience = encode_json(&profile.experience)?;
    let education = encode_json(&profile.education)?;

    let params: [&dyn ToSql; 13] = [
        &owner_id,
        &profile.status,
        &profile.company,
        &profile.website,
        &profile.location,
        &profile.bio,
        &profile.github_username,
        &skills,
        &social,
        &experience,
        &education,
        &profile.created_at,
        &profile.updated_at,
    ];

    conn.execute(
        "INSERT INTO profiles (
            owner_id, status, company, website, location, bio, github_username,
            skills, social, experience, education, created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params.as_slice(),
    )
    .map_err(map_sql_error)?;

    Ok(())
}

/// Update a profile
fn update_profile(conn: &DbConnection, profile: &Profile) -> DomainResult<()> {
    let owner_id = profile.owner_id.to_string();
    let skills = encode_json(&profile.skills)?;
    let social = encode_json(&profile.social)?;
    let experience = encode_json(&profile.experience)?;
    let education = encode_json(&profile.education)?;

    let params: [&dyn ToSql; 13] = [
        &profile.status,
        &profile.company,
        &profile.website,
        &profile.location,
        &profile.bio,
        &profile.github_username,
        &skills,
        &social,
        &experience,
        &education,
        &profile.created_at,
        &profile.updated_at,
        &owner_id, // WHERE clause
    ];

    conn.execute(
        "UPDATE profiles SET
            status = ?1, company = ?2, website = ?3, location = ?4, bio = ?5,
            github_username = ?6, skills = ?7, social = ?8, experience = ?9,
            education = ?10, created_at = ?11, updated_at = ?12
         WHERE owner_id = ?13",
        params.as_slice(),
    )
    .map_err(map_sql_error)?;

    Ok(())
}

// =============================================================================
// Error Mapping
// =============================================================================

fn map_sql_error(err: rusqlite::Error) -> DevLinkError {
    DevLinkError::from(InfraError::from(err))
}

fn map_join_error(err: task::JoinError) -> DevLinkError {
    DevLinkError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================

//! Identity repository implementation using SQLite
//!
//! Backs both identity-facing ports: the read-side owner-card projection
//! joined into profile responses, and the identity removal driven by the
//! cascading profile delete.

use std::sync::Arc;

use async_trait::async_trait;
use devlink_core::{IdentityStore, OwnerDirectory};
use devlink_domain::{DevLinkError, Identity, OwnerCard, OwnerId, Result as DomainResult};
use rusqlite::params;
use tokio::task;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed implementation of `OwnerDirectory` and `IdentityStore`
pub struct SqliteIdentityRepository {
    db: Arc<DbManager>,
}

impl SqliteIdentityRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Insert an identity record.
    ///
    /// Registration lives outside this service, so this helper exists for
    /// seeding (tests, fixtures) rather than as a core port.
    pub async fn insert(&self, identity: Identity) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO identities (id, name, avatar, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    identity.id.to_string(),
                    &identity.name,
                    &identity.avatar,
                    identity.created_at
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl OwnerDirectory for SqliteIdentityRepository {
    async fn project_owner_fields(&self, owner_id: OwnerId) -> DomainResult<Option<OwnerCard>> {
        let db = Arc::clone(&self.db);
        let owner = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<OwnerCard>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT name, avatar FROM identities WHERE id = ?1",
                params![&owner],
                |row| Ok(OwnerCard { name: row.get(0)?, avatar: row.get(1)? }),
            );

            match result {
                Ok(card) => Ok(Some(card)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl IdentityStore for SqliteIdentityRepository {
    async fn remove_identity(&self, owner_id: OwnerId) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let owner = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM identities WHERE id = ?1", params![&owner])
                .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
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

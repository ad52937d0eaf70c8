//! Application context - dependency injection container

use std::sync::Arc;

use devlink_core::{GithubGateway, IdentityStore, OwnerDirectory, ProfileService};
use devlink_domain::{Config, DevLinkError, Result};
use devlink_infra::database::{DbManager, SqliteIdentityRepository, SqliteProfileRepository};
use devlink_infra::integrations::GithubClient;
use tracing::info;

/// Type alias for the GitHub gateway trait object
type DynGithubGateway = dyn GithubGateway + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub profiles: Arc<ProfileService>,
    pub github: Arc<DynGithubGateway>,
}

impl AppContext {
    /// Create an application context from the given configuration.
    ///
    /// Opens the database, applies migrations, and wires the repositories
    /// into the core service.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let profile_repo = Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));
        let identity_repo = Arc::new(SqliteIdentityRepository::new(Arc::clone(&db)));

        // The identity repository backs both identity-facing ports.
        let directory: Arc<dyn OwnerDirectory> = identity_repo.clone();
        let identities: Arc<dyn IdentityStore> = identity_repo;

        let profiles = Arc::new(ProfileService::new(profile_repo, directory, identities));

        let github: Arc<DynGithubGateway> = Arc::new(GithubClient::new(&config.github)?);

        info!("application context initialised");

        Ok(Self { config, db, profiles, github })
    }

    /// Check that the database answers a trivial query.
    ///
    /// Runs on the blocking pool so the async runtime is not stalled by
    /// synchronous database work.
    pub async fn health_check(&self) -> Result<()> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|err| DevLinkError::Internal(format!("health check task failed: {}", err)))?
    }
}

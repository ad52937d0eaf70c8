//! # DevLink Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The profile aggregate service and its validation rules
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `devlink-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod profile;

// Infrastructure ports
pub mod github_ports;

pub use github_ports::GithubGateway;
pub use profile::ports::{IdentityStore, OwnerDirectory, ProfileRepository};
pub use profile::ProfileService;

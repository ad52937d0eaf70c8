//! # DevLink Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite)
//! - Configuration loading
//! - HTTP client implementations
//! - External service integrations (GitHub)
//!
//! ## Architecture
//! - Implements traits defined in `devlink-core`
//! - Depends on `devlink-domain` and `devlink-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use database::*;
pub use errors::*;
pub use http::*;
pub use integrations::*;

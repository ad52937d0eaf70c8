//! # DevLink App
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - axum route handlers (HTTP → core bridge)
//! - Application context (dependency injection)
//! - Request extractors and error-to-response mapping
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves the public HTTP surface

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;

// Re-export for convenience
pub use context::*;
pub use error::{ApiError, ApiResult};
pub use routes::router;

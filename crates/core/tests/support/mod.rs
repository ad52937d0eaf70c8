//! Shared test helpers for `devlink-core` integration tests.
//!
//! These helpers provide in-memory port implementations so the service
//! tests can focus on behaviour instead of boilerplate.

pub mod repositories;

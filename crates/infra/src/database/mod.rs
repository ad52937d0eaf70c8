//! Database implementations

pub mod identity_repository;
pub mod manager;
pub mod profile_repository;

pub use identity_repository::*;
pub use manager::*;
pub use profile_repository::*;

//! Identity types
//!
//! The identity record lives outside the profile aggregate; profiles
//! reference it by owner id and reads join its display fields in.

use serde::{Deserialize, Serialize};

use crate::types::profile::OwnerId;

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: OwnerId,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: i64,
}

/// Display projection of an identity, embedded in profile responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerCard {
    pub name: String,
    pub avatar: Option<String>,
}

//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// HTTP surface
pub const OWNER_ID_HEADER: &str = "x-user-id";
pub const API_BANNER: &str = "api running.";

// Caller-facing messages
pub const MSG_NO_OWN_PROFILE: &str = "There is no profile for this user.";
pub const MSG_PROFILE_NOT_FOUND: &str = "Profile not found";
pub const MSG_NO_GITHUB_PROFILE: &str = "No GitHub profile found";
pub const MSG_USER_DELETED: &str = "User deleted";

// GitHub lookup configuration
pub const GITHUB_REPOS_PER_PAGE: u8 = 5;
pub const GITHUB_REQUEST_TIMEOUT_SECS: u64 = 10;

//! External service integrations

pub mod github;

pub use github::GithubClient;

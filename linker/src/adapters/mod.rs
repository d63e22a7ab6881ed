//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod jira;

pub use github::GitHubClientImpl;
pub use jira::JiraClientImpl;

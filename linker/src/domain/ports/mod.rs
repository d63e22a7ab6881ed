//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod jira;

pub use github::{ListPullRequestsOptions, PullRequestSource};
pub use jira::IssueTracker;

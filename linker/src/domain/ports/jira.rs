//! Issue tracker port trait
//!
//! Defines the interface for reading issues and managing their remote
//! links in Jira.

use async_trait::async_trait;

use crate::domain::entities::{Issue, RemoteLink};
use crate::error::JiraError;

/// Port trait for Jira API operations
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch an issue and its current status
    async fn get_issue(&self, key: &str) -> Result<Issue, JiraError>;

    /// List the remote links attached to an issue
    async fn list_remote_links(&self, key: &str) -> Result<Vec<RemoteLink>, JiraError>;

    /// Attach a new remote link to an issue
    async fn create_remote_link(&self, key: &str, link: &RemoteLink) -> Result<(), JiraError>;
}

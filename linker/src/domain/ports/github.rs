//! Pull request source port trait
//!
//! Defines the interface for listing pull requests from GitHub.

use async_trait::async_trait;

use crate::domain::entities::{PullRequest, RepoRef};
use crate::error::GitHubError;

/// Listing options for pull requests
///
/// Only a single page is ever requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPullRequestsOptions {
    /// `open`, `closed` or `all`
    pub state: String,
    /// `created`, `updated`, `popularity` or `long-running`
    pub sort: String,
    /// `asc` or `desc`
    pub direction: String,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListPullRequestsOptions {
    /// All pull requests, most recently updated first, first page of 100
    fn default() -> Self {
        Self {
            state: "all".to_string(),
            sort: "updated".to_string(),
            direction: "desc".to_string(),
            page: 1,
            per_page: 100,
        }
    }
}

/// Port trait for reading pull requests
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// List pull requests of a repository, in the order given by `options`
    async fn list_pull_requests(
        &self,
        repo: &RepoRef,
        options: &ListPullRequestsOptions,
    ) -> Result<Vec<PullRequest>, GitHubError>;
}

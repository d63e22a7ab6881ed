//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and record calls so tests can verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Issue, PullRequest, RemoteLink, RepoRef};
use crate::domain::ports::{IssueTracker, ListPullRequestsOptions, PullRequestSource};
use crate::error::{GitHubError, JiraError};

// ============================================================================
// Mock Pull Request Source
// ============================================================================

#[derive(Default)]
pub struct MockPullRequestSource {
    /// Repository full name -> pull requests in listing order
    prs: Arc<RwLock<HashMap<String, Vec<PullRequest>>>>,
    listed: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockPullRequestSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self) -> Self {
        *self.should_fail.write().unwrap() = true;
        self
    }

    /// Append a pull request to the listing of `repo` (`owner/name`)
    pub fn with_pull_request(self, repo: &str, pr: PullRequest) -> Self {
        self.prs
            .write()
            .unwrap()
            .entry(repo.to_string())
            .or_default()
            .push(pr);
        self
    }

    /// Repositories listed so far, in call order
    pub fn listed_repositories(&self) -> Vec<String> {
        self.listed.read().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestSource for MockPullRequestSource {
    async fn list_pull_requests(
        &self,
        repo: &RepoRef,
        options: &ListPullRequestsOptions,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        self.listed.write().unwrap().push(repo.full_name());

        if *self.should_fail.read().unwrap() {
            return Err(GitHubError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let prs = self.prs.read().unwrap();
        Ok(prs
            .get(&repo.full_name())
            .map(|list| list.iter().take(options.per_page as usize).cloned().collect())
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock Issue Tracker
// ============================================================================

#[derive(Default)]
pub struct MockIssueTracker {
    issues: Arc<RwLock<HashMap<String, Issue>>>,
    links: Arc<RwLock<HashMap<String, Vec<RemoteLink>>>>,
    created: Arc<RwLock<Vec<(String, RemoteLink)>>>,
    requested: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
    fail_on_create: Arc<RwLock<bool>>,
}

impl MockIssueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every read
    pub fn failing(self) -> Self {
        *self.should_fail.write().unwrap() = true;
        self
    }

    /// Fail remote link creation only
    pub fn failing_on_create(self) -> Self {
        *self.fail_on_create.write().unwrap() = true;
        self
    }

    pub fn with_issue(self, key: &str, status: &str) -> Self {
        self.issues
            .write()
            .unwrap()
            .insert(key.to_string(), Issue::new(key, status));
        self
    }

    /// Pre-populate a remote link on an issue
    pub fn with_link(self, key: &str, link: RemoteLink) -> Self {
        self.links
            .write()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push(link);
        self
    }

    pub fn links_of(&self, key: &str) -> Vec<RemoteLink> {
        self.links
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Links created through the port, with the issue key they were created on
    pub fn created_links(&self) -> Vec<(String, RemoteLink)> {
        self.created.read().unwrap().clone()
    }

    /// Issue keys fetched so far, in call order
    pub fn requested_issues(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn get_issue(&self, key: &str) -> Result<Issue, JiraError> {
        self.requested.write().unwrap().push(key.to_string());

        if *self.should_fail.read().unwrap() {
            return Err(JiraError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        self.issues
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| JiraError::IssueNotFound(key.to_string()))
    }

    async fn list_remote_links(&self, key: &str) -> Result<Vec<RemoteLink>, JiraError> {
        if *self.should_fail.read().unwrap() {
            return Err(JiraError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.links_of(key))
    }

    async fn create_remote_link(&self, key: &str, link: &RemoteLink) -> Result<(), JiraError> {
        if *self.fail_on_create.read().unwrap() {
            return Err(JiraError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        self.links
            .write()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push(link.clone());
        self.created
            .write()
            .unwrap()
            .push((key.to_string(), link.clone()));

        Ok(())
    }
}

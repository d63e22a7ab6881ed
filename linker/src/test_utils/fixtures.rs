//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::config::TrackingConfig;
use crate::domain::entities::{PullRequest, PullRequestState, RemoteLink, RemoteLinkIcon, RepoRef};

/// Create an open pull request #42 by a team member in `openshift/image-registry`
pub fn test_pull_request(title: &str) -> PullRequest {
    PullRequest {
        number: 42,
        title: title.to_string(),
        state: PullRequestState::Open,
        merged: false,
        author: "dmage".to_string(),
        repo_full_name: "openshift/image-registry".to_string(),
        labels: Vec::new(),
    }
}

/// Create a closed and merged pull request
pub fn test_merged_pull_request(title: &str) -> PullRequest {
    PullRequest {
        state: PullRequestState::Closed,
        merged: true,
        ..test_pull_request(title)
    }
}

/// Create a remote link pointing at `url`
pub fn test_remote_link(url: &str) -> RemoteLink {
    RemoteLink {
        url: url.to_string(),
        title: "Linked earlier".to_string(),
        icon: Some(RemoteLinkIcon {
            url16x16: "https://github.com/favicon.ico".to_string(),
            title: "GitHub".to_string(),
        }),
    }
}

/// Two repositories, project `IR`, one team member and one team repository
pub fn test_tracking() -> TrackingConfig {
    TrackingConfig {
        repositories: vec![
            RepoRef::new("openshift", "image-registry"),
            RepoRef::new("openshift", "oc"),
        ],
        jira_projects: vec!["IR".to_string()],
        team: ["dmage".to_string()].into_iter().collect(),
        team_repos: ["openshift/image-registry".to_string()].into_iter().collect(),
    }
}

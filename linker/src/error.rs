//! Unified error types for the Jira linker
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Missing or malformed environment configuration
//! - `GitHubError`: GitHub API client errors
//! - `JiraError`: Jira API client errors
//! - `AppError`: Application layer errors (what the run orchestrator propagates)

use thiserror::Error;

/// Configuration errors - fatal before any remote call is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The environment variable {0} is not set or empty. Please set it and try again.")]
    Missing(String),

    #[error("Invalid value for {name}: {message}")]
    Invalid { name: String, message: String },
}

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Repository not found: {owner}/{repo}")]
    RepoNotFound { owner: String, repo: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Jira API client errors
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Unauthorized - check JIRA_USERNAME and JIRA_PASSWORD")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Jira error: {0}")]
    Jira(#[from] JiraError),

    #[error("Invalid issue key pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Run finished with errors in: {}", failed_repositories.join(", "))]
    RunFailed { failed_repositories: Vec<String> },
}

//! Status consistency checks
//!
//! Compares the Jira status of an issue with the state of the pull request
//! that references it:
//!
//! | PR state | WIP | merged | expected status       |
//! |----------|-----|--------|-----------------------|
//! | open     | yes |        | In Progress           |
//! | open     | no  |        | Code Review           |
//! | closed   |     | yes    | On QA or Done         |
//! | closed   |     | no     | anything              |
//!
//! Mismatches are advisories only; issue statuses are never changed.

use super::advisory::Advisory;
use crate::domain::entities::issue::{
    STATUS_CODE_REVIEW, STATUS_DONE, STATUS_IN_PROGRESS, STATUS_ON_QA,
};
use crate::domain::entities::pull_request::WIP_MARKER;
use crate::domain::entities::{Issue, PullRequest, PullRequestState};

/// What the issue status should be, given the pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// One of these statuses
    OneOf(Vec<&'static str>),
    /// Unmerged closes are not checked
    Unchecked,
    /// The pull request state is neither open nor closed
    UnexpectedState(String),
}

/// Expected issue status for a pull request whose title (marker stripped) is `title`
pub fn expected_status(pr: &PullRequest, title: &str) -> Expectation {
    match &pr.state {
        PullRequestState::Open if title.contains(WIP_MARKER) => {
            Expectation::OneOf(vec![STATUS_IN_PROGRESS])
        }
        PullRequestState::Open => Expectation::OneOf(vec![STATUS_CODE_REVIEW]),
        PullRequestState::Closed if pr.merged => {
            Expectation::OneOf(vec![STATUS_ON_QA, STATUS_DONE])
        }
        PullRequestState::Closed => Expectation::Unchecked,
        PullRequestState::Other(state) => Expectation::UnexpectedState(state.clone()),
    }
}

/// At most one advisory per issue and pull request
pub fn check_status(
    pr: &PullRequest,
    title: &str,
    issue: &Issue,
    web_url: &str,
) -> Option<Advisory> {
    match expected_status(pr, title) {
        Expectation::OneOf(want) if !want.iter().any(|s| issue.has_status(s)) => {
            Some(Advisory::StatusMismatch {
                key: issue.key.clone(),
                got: issue.status.clone(),
                want,
            })
        }
        Expectation::OneOf(_) | Expectation::Unchecked => None,
        Expectation::UnexpectedState(state) => Some(Advisory::UnexpectedState {
            url: pr.url(web_url),
            state,
        }),
    }
}

/// Reminder for open pull requests that are not on hold
pub fn hold_reminder(pr: &PullRequest, web_url: &str) -> Option<Advisory> {
    if pr.is_open() && !pr.is_on_hold() {
        Some(Advisory::NotOnHold {
            url: pr.url(web_url),
        })
    } else {
        None
    }
}

//! Pull request domain entity
//!
//! Pull requests live on GitHub. This entity is the read-only view the
//! reconciler needs; it is never mutated.

use serde::{Deserialize, Serialize};

/// Label that marks a pull request as not ready to merge
pub const HOLD_LABEL: &str = "do-not-merge/hold";

/// Title token that marks a pull request as work in progress
pub const WIP_MARKER: &str = "WIP";

/// A pull request as seen by the reconciler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: PullRequestState,
    pub merged: bool,
    /// Login of the author
    pub author: String,
    /// Full name (`owner/repo`) of the base repository
    pub repo_full_name: String,
    pub labels: Vec<String>,
}

impl PullRequest {
    pub fn is_open(&self) -> bool {
        self.state == PullRequestState::Open
    }

    pub fn is_wip(&self) -> bool {
        self.title.contains(WIP_MARKER)
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }

    pub fn is_on_hold(&self) -> bool {
        self.has_label(HOLD_LABEL)
    }

    /// Canonical web URL, e.g. `https://github.com/openshift/oc/pull/42`
    pub fn url(&self, web_url: &str) -> String {
        format!(
            "{}/{}/pull/{}",
            web_url.trim_end_matches('/'),
            self.repo_full_name,
            self.number
        )
    }

    /// Short reference, e.g. `openshift/oc#42`
    pub fn reference(&self) -> String {
        format!("{}#{}", self.repo_full_name, self.number)
    }
}

/// Pull request state
///
/// GitHub only reports `open` and `closed`, anything else is kept verbatim
/// so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PullRequestState {
    Open,
    Closed,
    Other(String),
}

impl From<&str> for PullRequestState {
    fn from(s: &str) -> Self {
        match s {
            "open" => PullRequestState::Open,
            "closed" => PullRequestState::Closed,
            other => PullRequestState::Other(other.to_string()),
        }
    }
}

impl From<String> for PullRequestState {
    fn from(s: String) -> Self {
        PullRequestState::from(s.as_str())
    }
}

impl From<PullRequestState> for String {
    fn from(state: PullRequestState) -> Self {
        state.to_string()
    }
}

impl std::fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PullRequestState::Open => write!(f, "open"),
            PullRequestState::Closed => write!(f, "closed"),
            PullRequestState::Other(s) => write!(f, "{}", s),
        }
    }
}

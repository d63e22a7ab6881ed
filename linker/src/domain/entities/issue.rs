//! Issue domain entity
//!
//! Issues live in Jira (source of truth). This entity represents
//! the reconciler's view of an issue: its key and workflow status.

use serde::{Deserialize, Serialize};

pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_CODE_REVIEW: &str = "Code Review";
pub const STATUS_ON_QA: &str = "On QA";
pub const STATUS_DONE: &str = "Done";

/// A tracked issue (from Jira)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. `IR-123`
    pub key: String,
    /// Name of the current workflow status, e.g. `Code Review`
    pub status: String,
}

impl Issue {
    pub fn new(key: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            status: status.into(),
        }
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

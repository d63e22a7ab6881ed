//! Remote link domain entity
//!
//! A cross-reference from a Jira issue to an external URL. The URL is the
//! identity of a link: an issue never gets two links to the same URL.

use serde::{Deserialize, Serialize};

/// A remote link attached to an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLink {
    pub url: String,
    pub title: String,
    pub icon: Option<RemoteLinkIcon>,
}

/// Icon shown next to a remote link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLinkIcon {
    pub url16x16: String,
    pub title: String,
}

impl RemoteLink {
    pub fn points_to(&self, url: &str) -> bool {
        self.url == url
    }
}

//! Link Service
//!
//! Makes sure a Jira issue carries a remote link to every pull request that
//! references it. The pull request URL identifies the link, so running the
//! service again for the same pair never creates a duplicate.

use std::sync::Arc;

use crate::domain::entities::{PullRequest, RemoteLink, RemoteLinkIcon};
use crate::domain::ports::IssueTracker;
use crate::error::JiraError;

/// Result of ensuring a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    AlreadyLinked,
    Created(RemoteLink),
}

pub struct LinkService<IT>
where
    IT: IssueTracker,
{
    tracker: Arc<IT>,
    web_url: String,
}

impl<IT> LinkService<IT>
where
    IT: IssueTracker,
{
    pub fn new(tracker: Arc<IT>, web_url: String) -> Self {
        Self {
            tracker,
            web_url: web_url.trim_end_matches('/').to_string(),
        }
    }

    /// The link that should exist on the issue for this pull request.
    ///
    /// `title` is the pull request title with the issue key marker stripped.
    pub fn build_link(&self, pr: &PullRequest, title: &str) -> RemoteLink {
        RemoteLink {
            url: pr.url(&self.web_url),
            title: format!("{}: {}", pr.reference(), title),
            icon: Some(RemoteLinkIcon {
                url16x16: format!("{}/favicon.ico", self.web_url),
                title: "GitHub".to_string(),
            }),
        }
    }

    /// Link `pr` to the issue `key` unless a link to the same URL exists
    pub async fn ensure_linked(
        &self,
        key: &str,
        pr: &PullRequest,
        title: &str,
    ) -> Result<LinkOutcome, JiraError> {
        tracing::trace!("Checking if {} is linked to {}...", pr.reference(), key);

        let link = self.build_link(pr, title);
        let existing = self.tracker.list_remote_links(key).await?;

        if existing.iter().any(|l| l.points_to(&link.url)) {
            tracing::trace!("{} is already linked to {}", pr.reference(), key);
            return Ok(LinkOutcome::AlreadyLinked);
        }

        tracing::info!(
            issue = %key,
            pr = %pr.reference(),
            "Linking the pull request {} to the issue {}...",
            pr.reference(),
            key
        );
        self.tracker.create_remote_link(key, &link).await?;

        Ok(LinkOutcome::Created(link))
    }
}

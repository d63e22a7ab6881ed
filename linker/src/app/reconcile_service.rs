//! Reconcile Service
//!
//! Orchestrates one run over every tracked repository:
//! - List the most recently updated pull requests (GitHub)
//! - Classify open team pull requests for review attention
//! - Check the referenced issue status (Jira)
//! - Link the pull request to the issue (Jira)
//!
//! Repositories and pull requests are processed strictly one after another.
//! The only write is the remote link creation, which is idempotent, so a
//! run can always be repeated.

use std::sync::Arc;

use super::advisory::Advisory;
use super::attention::AttentionClassifier;
use super::link_service::{LinkOutcome, LinkService};
use super::status_check::{check_status, hold_reminder};
use super::title_parser::TitleParser;
use crate::config::{ErrorPolicy, TrackingConfig};
use crate::domain::entities::{PullRequest, RepoRef};
use crate::domain::ports::{IssueTracker, ListPullRequestsOptions, PullRequestSource};
use crate::error::AppError;

/// What a run did
#[derive(Debug, Default)]
pub struct RunSummary {
    pub repositories_scanned: usize,
    pub pull_requests_scanned: usize,
    pub issues_checked: usize,
    pub links_created: usize,
    pub advisories: Vec<Advisory>,
    pub failed_repositories: Vec<String>,
}

impl RunSummary {
    fn record(&mut self, advisory: Advisory) {
        advisory.log();
        self.advisories.push(advisory);
    }

    #[cfg(test)]
    pub fn attention_count(&self, attention: super::advisory::Attention) -> usize {
        self.advisories
            .iter()
            .filter(|a| matches!(a, Advisory::Attention { attention: found, .. } if *found == attention))
            .count()
    }
}

pub struct ReconcileService<PS, IT>
where
    PS: PullRequestSource,
    IT: IssueTracker,
{
    pull_requests: Arc<PS>,
    tracker: Arc<IT>,
    links: LinkService<IT>,
    parser: TitleParser,
    classifier: AttentionClassifier,
    repositories: Vec<RepoRef>,
    web_url: String,
    error_policy: ErrorPolicy,
}

impl<PS, IT> ReconcileService<PS, IT>
where
    PS: PullRequestSource,
    IT: IssueTracker,
{
    pub fn new(
        pull_requests: Arc<PS>,
        tracker: Arc<IT>,
        tracking: TrackingConfig,
        web_url: String,
        error_policy: ErrorPolicy,
    ) -> Result<Self, AppError> {
        let parser = TitleParser::new(&tracking.jira_projects)?;
        let web_url = web_url.trim_end_matches('/').to_string();

        Ok(Self {
            pull_requests,
            links: LinkService::new(tracker.clone(), web_url.clone()),
            tracker,
            parser,
            classifier: AttentionClassifier::new(tracking.team, tracking.team_repos),
            repositories: tracking.repositories,
            web_url,
            error_policy,
        })
    }

    /// Run over every repository.
    ///
    /// With `ErrorPolicy::Abort` the first remote error ends the run. With
    /// `ErrorPolicy::SkipRepository` the failing repository is abandoned and
    /// the run fails at the end instead.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        for repo in &self.repositories {
            match self.reconcile_repository(repo, &mut summary).await {
                Ok(()) => {}
                Err(e) if self.error_policy == ErrorPolicy::SkipRepository => {
                    tracing::warn!(repo = %repo, "Skipping the rest of {}: {}", repo, e);
                    summary.failed_repositories.push(repo.full_name());
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            repositories = summary.repositories_scanned,
            pull_requests = summary.pull_requests_scanned,
            issues = summary.issues_checked,
            links_created = summary.links_created,
            advisories = summary.advisories.len(),
            "Run finished"
        );

        if summary.failed_repositories.is_empty() {
            Ok(summary)
        } else {
            Err(AppError::RunFailed {
                failed_repositories: summary.failed_repositories,
            })
        }
    }

    async fn reconcile_repository(
        &self,
        repo: &RepoRef,
        summary: &mut RunSummary,
    ) -> Result<(), AppError> {
        tracing::debug!(repo = %repo, "Analyzing github repository {}...", repo);

        let prs = self
            .pull_requests
            .list_pull_requests(repo, &ListPullRequestsOptions::default())
            .await?;
        summary.repositories_scanned += 1;

        for pr in &prs {
            self.reconcile_pull_request(pr, summary).await?;
        }

        Ok(())
    }

    /// Handle a single pull request
    pub async fn reconcile_pull_request(
        &self,
        pr: &PullRequest,
        summary: &mut RunSummary,
    ) -> Result<(), AppError> {
        summary.pull_requests_scanned += 1;
        let parsed = self.parser.parse(&pr.title);

        if let Some(attention) = self.classifier.classify(pr, &parsed) {
            summary.record(Advisory::Attention {
                attention,
                url: pr.url(&self.web_url),
                title: pr.title.clone(),
            });
        }

        if let Some(advisory) = hold_reminder(pr, &self.web_url) {
            summary.record(advisory);
        }

        let Some(found) = parsed.issue else {
            return Ok(());
        };

        let issue = self.tracker.get_issue(&found.key).await?;
        summary.issues_checked += 1;

        if let Some(advisory) = check_status(pr, &found.residual, &issue, &self.web_url) {
            summary.record(advisory);
        }

        if let LinkOutcome::Created(link) = self
            .links
            .ensure_linked(&found.key, pr, &found.residual)
            .await?
        {
            tracing::debug!(issue = %found.key, url = %link.url, "Remote link created");
            summary.links_created += 1;
        }

        Ok(())
    }
}

//! Attention classifier
//!
//! Sorts open pull requests of the team into review-attention buckets.
//! Purely observational.

use std::collections::HashSet;

use super::advisory::Attention;
use super::title_parser::ParsedTitle;
use crate::domain::entities::PullRequest;

pub struct AttentionClassifier {
    team: HashSet<String>,
    team_repos: HashSet<String>,
}

impl AttentionClassifier {
    pub fn new(team: HashSet<String>, team_repos: HashSet<String>) -> Self {
        Self { team, team_repos }
    }

    /// Whether the pull request belongs to the team, by author or by repository
    pub fn is_tracked(&self, pr: &PullRequest) -> bool {
        self.team.contains(&pr.author) || self.team_repos.contains(&pr.repo_full_name)
    }

    /// Bucket of an open, tracked, non-WIP pull request; `None` for anything else
    pub fn classify(&self, pr: &PullRequest, parsed: &ParsedTitle) -> Option<Attention> {
        if !pr.is_open() || !self.is_tracked(pr) || pr.is_wip() {
            return None;
        }

        let attention = match (&parsed.issue, parsed.bug_marker) {
            (Some(_), _) => Attention::AwaitingFeatureReview,
            (None, true) => Attention::AwaitingBugfixReview,
            (None, false) => Attention::Unassigned,
        };
        Some(attention)
    }
}

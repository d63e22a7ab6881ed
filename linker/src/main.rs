//! Jira Linker
//!
//! Reconciles GitHub pull requests with Jira issues: every pull request whose
//! title starts with an issue key gets a remote link on that issue, and
//! inconsistencies between the pull request and the issue status are reported.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;

use adapters::{GitHubClientImpl, JiraClientImpl};
use app::ReconcileService;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    // Create adapters
    let github = Arc::new(
        GitHubClientImpl::new(config.github_api_url.clone(), config.github_token.clone())
            .context("Failed to build GitHub client")?,
    );
    let jira = Arc::new(JiraClientImpl::new(
        config.jira_base_url.clone(),
        config.jira_username.clone(),
        config.jira_password.clone(),
    ));

    let service = ReconcileService::new(
        github,
        jira,
        config.tracking.clone(),
        config.github_web_url.clone(),
        config.error_policy,
    )?;

    service.run().await?;

    Ok(())
}

//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{PullRequest, PullRequestState, RepoRef};
use crate::domain::ports::{ListPullRequestsOptions, PullRequestSource};
use crate::error::GitHubError;

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    api_url: String,
    /// Anonymous requests when `None`
    token: Option<String>,
}

impl GitHubClientImpl {
    pub fn new(api_url: String, token: Option<String>) -> Result<Self, GitHubError> {
        // GitHub rejects requests without a User-Agent
        let http = Client::builder()
            .user_agent(concat!("jira-linker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else if status.as_u16() == 429 || is_rate_limit_exhausted(&response) {
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// A 403 only means rate limiting when the remaining quota is zero
fn is_rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0")
}

/// Response types from GitHub API
#[derive(Deserialize)]
struct PullRequestResponse {
    number: u64,
    title: String,
    state: String,
    /// Only present on single pull request responses
    merged: Option<bool>,
    merged_at: Option<String>,
    user: Option<UserResponse>,
    base: BaseResponse,
    #[serde(default)]
    labels: Vec<LabelResponse>,
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
}

#[derive(Deserialize)]
struct BaseResponse {
    repo: Option<RepoResponse>,
}

#[derive(Deserialize)]
struct RepoResponse {
    full_name: String,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
}

impl PullRequestResponse {
    fn into_pull_request(self, listed_repo: &RepoRef) -> PullRequest {
        PullRequest {
            number: self.number,
            title: self.title,
            state: PullRequestState::from(self.state),
            merged: self.merged.unwrap_or(self.merged_at.is_some()),
            author: self.user.map(|u| u.login).unwrap_or_default(),
            repo_full_name: self
                .base
                .repo
                .map(|r| r.full_name)
                .unwrap_or_else(|| listed_repo.full_name()),
            labels: self.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

#[async_trait]
impl PullRequestSource for GitHubClientImpl {
    async fn list_pull_requests(
        &self,
        repo: &RepoRef,
        options: &ListPullRequestsOptions,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        let url = self.api_url(&format!(
            "/repos/{}/{}/pulls?state={}&sort={}&direction={}&page={}&per_page={}",
            repo.owner,
            repo.name,
            options.state,
            options.sort,
            options.direction,
            options.page,
            options.per_page
        ));

        let resp = self.get(&url).send().await?;

        if resp.status().as_u16() == 404 {
            return Err(GitHubError::RepoNotFound {
                owner: repo.owner.clone(),
                repo: repo.name.clone(),
            });
        }

        let prs: Vec<PullRequestResponse> = self.handle_response(resp).await?;
        Ok(prs
            .into_iter()
            .map(|pr| pr.into_pull_request(repo))
            .collect())
    }
}

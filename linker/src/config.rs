use std::collections::HashSet;
use std::env;

use crate::domain::entities::RepoRef;
use crate::error::ConfigError;

const DEFAULT_REPOSITORIES: &[&str] = &[
    "openshift/api",
    "openshift/cluster-image-registry-operator",
    "openshift/cluster-monitoring-operator",
    "openshift/docker-distribution",
    "openshift/image-registry",
    "openshift/oc",
    "openshift/openshift-apiserver",
    "openshift/origin",
    "openshift/release",
];

const DEFAULT_JIRA_PROJECTS: &[&str] = &["IR"];

const DEFAULT_TEAM: &[&str] = &["dmage", "ricardomaraschini"];

const DEFAULT_TEAM_REPOS: &[&str] = &[
    "openshift/cluster-image-registry-operator",
    "openshift/image-registry",
];

#[derive(Clone)]
pub struct Config {
    pub jira_base_url: String,
    pub jira_username: String,
    pub jira_password: String,
    pub github_api_url: String,
    /// Host used to build canonical pull request URLs
    pub github_web_url: String,
    /// Anonymous GitHub access when unset
    pub github_token: Option<String>,
    pub tracking: TrackingConfig,
    pub error_policy: ErrorPolicy,
}

/// What the reconciler scans and who it keeps an eye on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    pub repositories: Vec<RepoRef>,
    /// Jira project prefixes, e.g. `IR`
    pub jira_projects: Vec<String>,
    /// GitHub logins of the team
    pub team: HashSet<String>,
    /// Full names of repositories owned by the team
    pub team_repos: HashSet<String>,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            repositories: DEFAULT_REPOSITORIES
                .iter()
                .filter_map(|r| r.parse().ok())
                .collect(),
            jira_projects: to_strings(DEFAULT_JIRA_PROJECTS),
            team: to_strings(DEFAULT_TEAM).into_iter().collect(),
            team_repos: to_strings(DEFAULT_TEAM_REPOS).into_iter().collect(),
        }
    }
}

/// How the run reacts to a failed remote call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the whole run on the first error
    #[default]
    Abort,
    /// Log the error, skip the rest of the repository and go on with the next one
    SkipRepository,
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip-repository" => Ok(ErrorPolicy::SkipRepository),
            _ => Err(format!(
                "unknown error policy '{}', expected 'abort' or 'skip-repository'",
                s
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required =
            |name: &str| get(name).ok_or_else(|| ConfigError::Missing(name.to_string()));

        let jira_base_url = required("JIRA_BASE_URL")?;
        let jira_username = required("JIRA_USERNAME")?;
        let jira_password = required("JIRA_PASSWORD")?;

        let defaults = TrackingConfig::default();
        let list = |name: &str| get(name).map(|v| parse_list(name, &v)).transpose();

        let repositories = match list("LINKER_REPOSITORIES")? {
            Some(values) => values
                .into_iter()
                .map(|r| {
                    r.parse::<RepoRef>().map_err(|message| ConfigError::Invalid {
                        name: "LINKER_REPOSITORIES".to_string(),
                        message,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.repositories,
        };

        let tracking = TrackingConfig {
            repositories,
            jira_projects: list("LINKER_JIRA_PROJECTS")?.unwrap_or(defaults.jira_projects),
            team: list("LINKER_TEAM")?
                .map(|v| v.into_iter().collect())
                .unwrap_or(defaults.team),
            team_repos: list("LINKER_TEAM_REPOS")?
                .map(|v| v.into_iter().collect())
                .unwrap_or(defaults.team_repos),
        };

        let error_policy = match get("LINKER_ERROR_POLICY") {
            Some(value) => value.parse().map_err(|message| ConfigError::Invalid {
                name: "LINKER_ERROR_POLICY".to_string(),
                message,
            })?,
            None => ErrorPolicy::default(),
        };

        Ok(Self {
            jira_base_url,
            jira_username,
            jira_password,
            github_api_url: get("GITHUB_API_URL")
                .unwrap_or_else(|| "https://api.github.com".to_string()),
            github_web_url: get("GITHUB_WEB_URL")
                .unwrap_or_else(|| "https://github.com".to_string()),
            github_token: get("GITHUB_TOKEN"),
            tracking,
            error_policy,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jira_base_url", &self.jira_base_url)
            .field("jira_username", &self.jira_username)
            .field("jira_password", &"<redacted>")
            .field("github_api_url", &self.github_api_url)
            .field("github_web_url", &self.github_web_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("tracking", &self.tracking)
            .field("error_policy", &self.error_policy)
            .finish()
    }
}

/// Comma-separated list; a set variable must name at least one entry
fn parse_list(name: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let values: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        return Err(ConfigError::Invalid {
            name: name.to_string(),
            message: "expected at least one comma-separated entry".to_string(),
        });
    }
    Ok(values)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

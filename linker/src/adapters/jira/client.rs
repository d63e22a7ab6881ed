//! Jira API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::domain::entities::{Issue, RemoteLink, RemoteLinkIcon};
use crate::domain::ports::IssueTracker;
use crate::error::JiraError;

/// Implementation of the Jira API client, authenticated with basic auth
pub struct JiraClientImpl {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl JiraClientImpl {
    pub fn new(base_url: String, username: String, password: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/2{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, JiraError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| JiraError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(JiraError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(JiraError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), JiraError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(JiraError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(JiraError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for Jira API
#[derive(Serialize)]
struct CreateRemoteLinkRequest<'a> {
    object: RemoteLinkObjectRequest<'a>,
}

#[derive(Serialize)]
struct RemoteLinkObjectRequest<'a> {
    url: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<RemoteLinkIconRequest<'a>>,
}

#[derive(Serialize)]
struct RemoteLinkIconRequest<'a> {
    url16x16: &'a str,
    title: &'a str,
}

impl<'a> From<&'a RemoteLink> for CreateRemoteLinkRequest<'a> {
    fn from(link: &'a RemoteLink) -> Self {
        CreateRemoteLinkRequest {
            object: RemoteLinkObjectRequest {
                url: &link.url,
                title: &link.title,
                icon: link.icon.as_ref().map(|icon| RemoteLinkIconRequest {
                    url16x16: &icon.url16x16,
                    title: &icon.title,
                }),
            },
        }
    }
}

/// Response types from Jira API
#[derive(Deserialize)]
struct IssueResponse {
    key: String,
    fields: IssueFieldsResponse,
}

#[derive(Deserialize)]
struct IssueFieldsResponse {
    status: StatusResponse,
}

#[derive(Deserialize)]
struct StatusResponse {
    name: String,
}

impl From<IssueResponse> for Issue {
    fn from(r: IssueResponse) -> Self {
        Issue::new(r.key, r.fields.status.name)
    }
}

#[derive(Deserialize)]
struct RemoteLinkResponse {
    object: RemoteLinkObjectResponse,
}

#[derive(Deserialize)]
struct RemoteLinkObjectResponse {
    url: String,
    #[serde(default)]
    title: String,
    icon: Option<RemoteLinkIconResponse>,
}

#[derive(Deserialize)]
struct RemoteLinkIconResponse {
    url16x16: Option<String>,
    title: Option<String>,
}

impl From<RemoteLinkResponse> for RemoteLink {
    fn from(r: RemoteLinkResponse) -> Self {
        let icon = r.object.icon.and_then(|icon| {
            icon.url16x16.map(|url16x16| RemoteLinkIcon {
                url16x16,
                title: icon.title.unwrap_or_default(),
            })
        });

        RemoteLink {
            url: r.object.url,
            title: r.object.title,
            icon,
        }
    }
}

#[async_trait]
impl IssueTracker for JiraClientImpl {
    async fn get_issue(&self, key: &str) -> Result<Issue, JiraError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/issue/{}?fields=status", encode(key))))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(JiraError::IssueNotFound(key.to_string()));
        }

        let issue: IssueResponse = self.handle_response(resp).await?;
        Ok(issue.into())
    }

    async fn list_remote_links(&self, key: &str) -> Result<Vec<RemoteLink>, JiraError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/issue/{}/remotelink", encode(key))))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(JiraError::IssueNotFound(key.to_string()));
        }

        let links: Vec<RemoteLinkResponse> = self.handle_response(resp).await?;
        Ok(links.into_iter().map(|l| l.into()).collect())
    }

    async fn create_remote_link(&self, key: &str, link: &RemoteLink) -> Result<(), JiraError> {
        let resp = self
            .http
            .post(self.api_url(&format!("/issue/{}/remotelink", encode(key))))
            .basic_auth(&self.username, Some(&self.password))
            .json(&CreateRemoteLinkRequest::from(link))
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> JiraClientImpl {
        JiraClientImpl::new(server.uri(), "bot".to_string(), "secret".to_string())
    }

    fn link() -> RemoteLink {
        RemoteLink {
            url: "https://github.com/openshift/image-registry/pull/42".to_string(),
            title: "openshift/image-registry#42: Fix registry pruning".to_string(),
            icon: Some(RemoteLinkIcon {
                url16x16: "https://github.com/favicon.ico".to_string(),
                title: "GitHub".to_string(),
            }),
        }
    }

    #[test]
    fn test_create_remote_link_request_serialization() {
        let link = link();
        let json = serde_json::to_value(CreateRemoteLinkRequest::from(&link)).unwrap();
        assert_eq!(
            json,
            json!({
                "object": {
                    "url": "https://github.com/openshift/image-registry/pull/42",
                    "title": "openshift/image-registry#42: Fix registry pruning",
                    "icon": {
                        "url16x16": "https://github.com/favicon.ico",
                        "title": "GitHub"
                    }
                }
            })
        );
    }

    #[test]
    fn test_request_omits_missing_icon() {
        let link = RemoteLink { icon: None, ..link() };
        let json = serde_json::to_string(&CreateRemoteLinkRequest::from(&link)).unwrap();
        assert!(!json.contains("icon"));
    }

    #[tokio::test]
    async fn get_issue_reads_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/IR-123"))
            .and(query_param("fields", "status"))
            .and(basic_auth("bot", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "10001",
                "key": "IR-123",
                "fields": { "status": { "id": "3", "name": "Code Review" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let issue = client(&server).get_issue("IR-123").await.unwrap();

        assert_eq!(issue, Issue::new("IR-123", "Code Review"));
    }

    #[tokio::test]
    async fn get_issue_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server).get_issue("IR-404").await.unwrap_err();

        assert!(matches!(err, JiraError::IssueNotFound(ref key) if key == "IR-404"));
    }

    #[tokio::test]
    async fn unauthorized_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server).list_remote_links("IR-1").await.unwrap_err();

        assert!(matches!(err, JiraError::Unauthorized));
    }

    #[tokio::test]
    async fn list_remote_links_maps_objects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/IR-123/remotelink"))
            .and(basic_auth("bot", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "object": {
                        "url": "https://github.com/openshift/image-registry/pull/42",
                        "title": "openshift/image-registry#42: Fix registry pruning",
                        "icon": { "url16x16": "https://github.com/favicon.ico", "title": "GitHub" }
                    }
                },
                {
                    "id": 2,
                    "object": { "url": "https://docs.example.com/design", "icon": {} }
                }
            ])))
            .mount(&server)
            .await;

        let links = client(&server).list_remote_links("IR-123").await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0], link());
        assert_eq!(links[1].url, "https://docs.example.com/design");
        assert_eq!(links[1].title, "");
        assert!(links[1].icon.is_none());
    }

    #[tokio::test]
    async fn create_remote_link_posts_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/IR-123/remotelink"))
            .and(basic_auth("bot", "secret"))
            .and(body_json(json!({
                "object": {
                    "url": "https://github.com/openshift/image-registry/pull/42",
                    "title": "openshift/image-registry#42: Fix registry pruning",
                    "icon": { "url16x16": "https://github.com/favicon.ico", "title": "GitHub" }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 10000,
                "self": "https://issues.example.com/rest/api/2/issue/IR-123/remotelink/10000"
            })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .create_remote_link("IR-123", &link())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_remote_link_failure_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("{\"errorMessages\":[\"bad\"]}"))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_remote_link("IR-123", &link())
            .await
            .unwrap_err();

        match err {
            JiraError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("bad"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = JiraClientImpl::new(
            "https://issues.example.com/".to_string(),
            "bot".to_string(),
            "secret".to_string(),
        );
        assert_eq!(
            client.api_url("/issue/IR-1"),
            "https://issues.example.com/rest/api/2/issue/IR-1"
        );
    }
}

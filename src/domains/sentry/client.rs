//! Sentry REST API client.
//!
//! A thin adapter over `reqwest` bound to one Sentry instance: base address,
//! bearer credential and organization slug are fixed at construction. Every
//! call is a single stateless round trip; responses are returned as raw JSON
//! values and serialized for the MCP client by the tool layer.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, header};
use serde_json::{Value, json};
use tracing::debug;

use super::error::{SentryError, SentryResult};
use crate::core::config::SentryConfig;

/// Fixed timeout for every upstream request. No retries are performed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Client for the Sentry REST API (`<SENTRY_URL>/api/0/`).
#[derive(Debug, Clone)]
pub struct SentryClient {
    http: Client,
    api_base: String,
    organization: String,
}

impl SentryClient {
    /// Build a client from the resolved Sentry configuration.
    pub fn new(config: &SentryConfig) -> SentryResult<Self> {
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.auth_token))
            .map_err(|_| SentryError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: format!("{}/api/0", config.url.trim_end_matches('/')),
            organization: config.organization.clone(),
        })
    }

    /// The organization slug this client is scoped to.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Fetch one issue by its numeric id.
    pub async fn issue(&self, issue_id: &str) -> SentryResult<Value> {
        self.send(self.http.get(self.url(&format!("issues/{}/", issue_id))))
            .await
    }

    /// Fetch the latest event recorded for an issue.
    pub async fn latest_event(&self, issue_id: &str) -> SentryResult<Value> {
        let path = format!(
            "organizations/{}/issues/{}/events/latest/",
            self.organization, issue_id
        );
        self.send(self.http.get(self.url(&path))).await
    }

    /// List the organization's projects.
    pub async fn projects(&self) -> SentryResult<Value> {
        let path = format!("organizations/{}/projects/", self.organization);
        self.send(self.http.get(self.url(&path))).await
    }

    /// List a project's issues, optionally filtered by a Sentry search query.
    pub async fn project_issues(
        &self,
        project_slug: &str,
        query: Option<&str>,
    ) -> SentryResult<Value> {
        let path = format!("projects/{}/{}/issues/", self.organization, project_slug);
        let mut request = self.http.get(self.url(&path));
        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }
        self.send(request).await
    }

    /// Fetch one event by project slug and event id.
    pub async fn event(&self, project_slug: &str, event_id: &str) -> SentryResult<Value> {
        let path = format!(
            "projects/{}/{}/events/{}/",
            self.organization, project_slug, event_id
        );
        self.send(self.http.get(self.url(&path))).await
    }

    /// Update an issue's status, returning the updated issue.
    pub async fn update_issue_status(&self, issue_id: &str, status: &str) -> SentryResult<Value> {
        let request = self
            .http
            .put(self.url(&format!("issues/{}/", issue_id)))
            .json(&json!({ "status": status }));
        self.send(request).await
    }

    /// Attach a comment to an issue, returning the created comment record.
    pub async fn create_issue_comment(&self, issue_id: &str, text: &str) -> SentryResult<Value> {
        let request = self
            .http
            .post(self.url(&format!("issues/{}/comments/", issue_id)))
            .json(&json!({ "text": text }));
        self.send(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Issue the request and decode the JSON body. Non-2xx responses are
    /// turned into `SentryError::Api` carrying the status and raw body.
    async fn send(&self, request: RequestBuilder) -> SentryResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Sentry responded with status {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(url: &str) -> SentryClient {
        SentryClient::new(&SentryConfig {
            url: url.to_string(),
            auth_token: "token".to_string(),
            organization: "acme".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_api_base_normalization() {
        // Trailing slashes on the configured URL must not double up
        let client = test_client("https://sentry.example.com/");
        assert_eq!(
            client.url("issues/42/"),
            "https://sentry.example.com/api/0/issues/42/"
        );

        let client = test_client("https://sentry.example.com");
        assert_eq!(
            client.url("organizations/acme/projects/"),
            "https://sentry.example.com/api/0/organizations/acme/projects/"
        );
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = SentryClient::new(&SentryConfig {
            url: "https://sentry.example.com".to_string(),
            auth_token: "bad\ntoken".to_string(),
            organization: "acme".to_string(),
        });
        assert!(matches!(result, Err(SentryError::InvalidToken)));
    }
}

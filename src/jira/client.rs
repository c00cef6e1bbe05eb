//! Jira HTTP client for REST API interactions

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::defaults;
use crate::error::{JiraError, Result};
use crate::jira::credentials::Credentials;

/// Jira REST API client
///
/// Holds the precomputed Basic auth header and the API version selected by
/// the instance type; both stay constant for the life of the run.
pub struct JiraClient {
    client: Client,
    base_url: String,
    api_version: &'static str,
    auth_header: String,
}

impl JiraClient {
    /// Create a new client with connect and per-request timeouts.
    ///
    /// The request timeout bounds how long a detail fetch can occupy one of
    /// the worker slots; without it a hung request would pin its slot for
    /// the life of the run.
    pub fn new(credentials: &Credentials, request_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: credentials.base_url.clone(),
            api_version: credentials.api_version(),
            auth_header: credentials.basic_auth_header(),
        }
    }

    /// Base URL of the instance (no trailing slash)
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL for a REST API path (e.g. "filter/search")
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/{}/{}", self.base_url(), self.api_version, path)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
    }

    /// Parse an API response, returning an error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Non-success response body: {}", body);
            return Err(JiraError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
impl JiraClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        use crate::cli::InstanceType;
        let credentials = Credentials::new(InstanceType::Cloud, base_url, "tester", "token");
        Self::new(&credentials, defaults::REQUEST_TIMEOUT_SECS)
    }
}

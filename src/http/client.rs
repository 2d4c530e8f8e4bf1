//! HTTP client for the Illuminate REST API
//!
//! Issues one signed GET per call and normalizes failures:
//! - connection problems name the base URL
//! - 401 and 404 get their own error kinds
//! - other non-2xx statuses carry status and body
//! - a 2xx body that is not JSON is logged and yields `None`

use crate::auth::Authenticator;
use crate::error::{Error, Result};
use crate::pagination::PageSource;
use crate::types::{JsonValue, QueryParams};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL every relative path is joined onto
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(30),
            user_agent: format!("illuminate-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Signed HTTP client bound to one API base URL.
///
/// Cheap to share: all state is immutable after construction and the
/// underlying `reqwest::Client` pools connections internally.
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    base_url: Url,
    authenticator: Option<Authenticator>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Base URL cannot have paths: {base_url}"
            )));
        }

        Ok(Self {
            client,
            config,
            base_url,
            authenticator: None,
        })
    }

    /// Create a client that signs every request
    pub fn with_auth(config: HttpClientConfig, authenticator: Authenticator) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.authenticator = Some(authenticator);
        Ok(client)
    }

    /// Base URL all requests are relative to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Build the absolute URL for a relative path plus extra path segments.
    ///
    /// Every piece is appended as a percent-encoded path segment, so `?`,
    /// `#`, `/` or a scheme-like `:` inside a segment stay in the path.
    pub fn build_url(&self, relative_path: &str, segments: &[String]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::config("Base URL cannot have paths"))?;
            path.pop_if_empty();
            path.extend(relative_path.split('/').filter(|piece| !piece.is_empty()));
            path.extend(segments);
        }
        Ok(url)
    }

    /// Issue one signed GET and decode the body as JSON.
    ///
    /// Returns `Ok(None)` when the server answers 2xx with a non-JSON body.
    pub async fn get_json(
        &self,
        relative_path: &str,
        segments: &[String],
        query: &QueryParams,
    ) -> Result<Option<JsonValue>> {
        let url = self.build_url(relative_path, segments)?;
        debug!("Hitting url: {} with params: {:?}", url, query);

        let mut req = self.client.get(url).timeout(self.config.timeout);
        if !query.is_empty() {
            req = req.query(query);
        }
        let mut request = req.build()?;

        if let Some(ref auth) = self.authenticator {
            auth.sign(&mut request)?;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::AuthenticationFailure);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found(display_path(relative_path, segments)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        match serde_json::from_str::<JsonValue>(&body) {
            Ok(json) => Ok(Some(json)),
            Err(e) => {
                error!("Response was not valid JSON: {e}");
                Ok(None)
            }
        }
    }

    /// Bind this client to one endpoint so pages can be fetched from it
    pub fn endpoint(&self, relative_path: impl Into<String>, segments: Vec<String>) -> Endpoint<'_> {
        Endpoint {
            client: self,
            relative_path: relative_path.into(),
            segments,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            };
        }
        Error::ConnectionFailure {
            base_url: self.base_url.to_string(),
            source: e,
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_authenticator", &self.authenticator.is_some())
            .finish_non_exhaustive()
    }
}

/// One endpoint of the API: relative path plus extra path segments
#[derive(Debug, Clone)]
pub struct Endpoint<'a> {
    client: &'a HttpClient,
    relative_path: String,
    segments: Vec<String>,
}

#[async_trait]
impl<'a> PageSource for Endpoint<'a> {
    async fn fetch_page(&self, query: &QueryParams) -> Result<Option<JsonValue>> {
        self.client
            .get_json(&self.relative_path, &self.segments, query)
            .await
    }
}

fn display_path(relative_path: &str, segments: &[String]) -> String {
    let mut path = relative_path.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

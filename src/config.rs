//! Client configuration
//!
//! A `ClientConfig` can be loaded from YAML, from `ILLUMINATE_*` environment
//! variables, or assembled with [`ClientConfig::builder`].
//!
//! ```yaml
//! subdomain: demo
//! instance: live
//! consumer_key: ...
//! consumer_secret: ...
//! access_token: ...
//! access_token_secret: ...
//! max_workers: 10
//! pagination: concurrent
//! ```

use crate::auth::OAuth1Credentials;
use crate::error::{Error, Result};
use crate::pagination::{default_page_size, PaginationMode};
use crate::types::MAX_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Base URL template: subdomain, then instance
pub const ILLUMINATE_URL_TEMPLATE: &str =
    "https://{subdomain}.illuminateed.com/{instance}/rest_server.php/Api/";

/// Prefix of every configuration environment variable
pub const ENV_PREFIX: &str = "ILLUMINATE_";

// ============================================================================
// Client Config
// ============================================================================

/// Everything needed to construct an [`crate::Illuminate`] client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Customer subdomain (`{subdomain}.illuminateed.com`)
    #[serde(default)]
    pub subdomain: String,

    /// Instance name within the subdomain (e.g. `live`)
    #[serde(default)]
    pub instance: String,

    /// OAuth1 credentials
    #[serde(flatten)]
    pub credentials: OAuth1Credentials,

    /// Concurrent page requests allowed per client
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pagination strategy
    #[serde(default)]
    pub pagination: PaginationMode,

    /// Page size requested by concurrent pagination
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Override for the templated base URL (proxies, test servers)
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_max_workers() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Create a config with default tuning
    pub fn new(
        subdomain: impl Into<String>,
        instance: impl Into<String>,
        credentials: OAuth1Credentials,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            instance: instance.into(),
            credentials,
            max_workers: default_max_workers(),
            user_agent: None,
            timeout_secs: default_timeout_secs(),
            pagination: PaginationMode::default(),
            page_size: default_page_size(),
            base_url: None,
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML (or JSON) file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load a config from `ILLUMINATE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load a config through a variable lookup function.
    ///
    /// `lookup` receives full variable names such as `ILLUMINATE_SUBDOMAIN`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        let required = |name: &str| var(name).unwrap_or_default();

        let mut config = Self::new(
            required("SUBDOMAIN"),
            required("INSTANCE"),
            OAuth1Credentials::new(
                required("CONSUMER_KEY"),
                required("CONSUMER_SECRET"),
                required("ACCESS_TOKEN"),
                required("ACCESS_TOKEN_SECRET"),
            ),
        );

        if let Some(value) = var("MAX_WORKERS") {
            config.max_workers = parse_var("MAX_WORKERS", &value)?;
        }
        if let Some(value) = var("TIMEOUT_SECS") {
            config.timeout_secs = parse_var("TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = var("PAGE_SIZE") {
            config.page_size = parse_var("PAGE_SIZE", &value)?;
        }
        if let Some(value) = var("PAGINATION") {
            config.pagination = value.parse()?;
        }
        config.user_agent = var("USER_AGENT");
        config.base_url = var("BASE_URL");

        config.validate()?;
        Ok(config)
    }

    /// Check that the config can produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_none() {
            if self.subdomain.trim().is_empty() {
                return Err(Error::config("subdomain cannot be empty"));
            }
            if self.instance.trim().is_empty() {
                return Err(Error::config("instance cannot be empty"));
            }
        }

        let missing = self.credentials.missing_fields();
        if !missing.is_empty() {
            return Err(Error::config(format!(
                "Missing OAuth1 credentials: {}",
                missing.join(", ")
            )));
        }

        if self.max_workers == 0 {
            return Err(Error::config("max_workers must be at least 1"));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be at least 1"));
        }

        if self.page_size == 0 || self.page_size > MAX_LIMIT {
            return Err(Error::config(format!(
                "page_size must be between 1 and {MAX_LIMIT}"
            )));
        }

        Ok(())
    }

    /// Base URL every request is relative to
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => ILLUMINATE_URL_TEMPLATE
                .replace("{subdomain}", &self.subdomain)
                .replace("{instance}", &self.instance),
        }
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        Error::config(format!(
            "Invalid value for {ENV_PREFIX}{name}: '{value}'"
        ))
    })
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    subdomain: String,
    instance: String,
    credentials: Option<OAuth1Credentials>,
    max_workers: Option<usize>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    pagination: Option<PaginationMode>,
    page_size: Option<u32>,
    base_url: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the subdomain
    #[must_use]
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = subdomain.into();
        self
    }

    /// Set the instance
    #[must_use]
    pub fn instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    /// Set the OAuth1 credentials
    #[must_use]
    pub fn credentials(
        mut self,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(OAuth1Credentials::new(
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
        ));
        self
    }

    /// Set the worker pool size for concurrent pagination
    #[must_use]
    pub fn max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = Some(max_workers);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the per-request timeout (whole seconds are kept)
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the pagination strategy
    #[must_use]
    pub fn pagination(mut self, mode: PaginationMode) -> Self {
        self.pagination = Some(mode);
        self
    }

    /// Set the page size for concurrent pagination
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Override the templated base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<ClientConfig> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::config("OAuth1 credentials are required"))?;

        let mut config = ClientConfig::new(self.subdomain, self.instance, credentials);
        if let Some(max_workers) = self.max_workers {
            config.max_workers = max_workers;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout.as_secs();
        }
        if let Some(mode) = self.pagination {
            config.pagination = mode;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        config.user_agent = self.user_agent;
        config.base_url = self.base_url;

        config.validate()?;
        Ok(config)
    }
}

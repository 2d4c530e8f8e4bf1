//! Illuminate client
//!
//! The client owns the signed session, the pagination strategy and the site
//! list fetched at construction. Every listing goes through one path:
//!
//! ```text
//! resource token ──► endpoint name ──► signed GET ──► shape ──┬─► bare list
//!   "student_data"     "StudentData"                          ├─► envelope ──► paginator
//!                                                             └─► single entity
//! ```

mod resource;
mod site;

pub use resource::ResourceRequest;
pub use site::{determine_district, Site, DISTRICT_SITE_ID, DISTRICT_SITE_TYPE, UNKNOWN_DISTRICT};

use crate::auth::{Authenticator, OAuth1Credentials};
use crate::config::ClientConfig;
use crate::decode::{classify, ResponseShape};
use crate::endpoint::{
    assessment_view_segments, endpoint_name, resource_from_accessor, ASSESSMENT_ENDPOINT,
};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{PageSource, PaginationMode, Paginator};
use crate::types::{JsonValue, QueryParams, ResultSet};
use std::sync::Arc;
use tracing::debug;

/// A client for one Illuminate instance.
///
/// Safe to share between tasks; concurrent calls only share immutable state
/// and the worker pool used by concurrent pagination.
pub struct Illuminate {
    http: HttpClient,
    paginator: Arc<dyn Paginator>,
    sites: Vec<Site>,
    district: String,
}

impl Illuminate {
    /// Connect with the default tuning
    pub async fn new(
        subdomain: impl Into<String>,
        instance: impl Into<String>,
        credentials: OAuth1Credentials,
    ) -> Result<Self> {
        Self::connect(ClientConfig::new(subdomain, instance, credentials)).await
    }

    /// Establish the session, load the site list and derive the district.
    ///
    /// Fails if the configuration is invalid or the initial `sites` call
    /// fails; no client exists in that case.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut http_config = HttpClientConfig::builder()
            .base_url(config.base_url())
            .timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            http_config = http_config.user_agent(agent);
        }
        let http = HttpClient::with_auth(
            http_config.build(),
            Authenticator::new(config.credentials.clone()),
        )?;
        debug!("OAuth1 session initialized.");

        let mut client = Self {
            http,
            paginator: config.pagination.paginator(config.max_workers, config.page_size),
            sites: Vec::new(),
            district: String::new(),
        };

        client.sites = client.get_sites().await?;
        client.district = determine_district(&client.sites);

        debug!("Illuminate client initialized for {}!", client.district);
        Ok(client)
    }

    /// Sites loaded at construction
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// District label derived from the sites
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Pagination strategy in use
    pub fn pagination_mode(&self) -> PaginationMode {
        self.paginator.mode()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    /// Fetch every record of a resource listing.
    ///
    /// `resource` is a snake_case token (`student_data`); `segments` are
    /// appended to the endpoint path and `query` is forwarded verbatim.
    /// A body that is not JSON yields an empty result set.
    pub async fn fetch(
        &self,
        resource: &str,
        segments: &[String],
        query: &QueryParams,
    ) -> Result<ResultSet> {
        let query = self.paginator.initial_query(query)?;
        let endpoint = self.http.endpoint(endpoint_name(resource), segments.to_vec());

        let Some(body) = endpoint.fetch_page(&query).await? else {
            return Ok(ResultSet::new());
        };

        match classify(body)? {
            ResponseShape::BareList(records) => {
                debug!("Returning {} results.", records.len());
                Ok(records)
            }
            ResponseShape::Paginated(first) => self.paginator.collect(&endpoint, &query, first).await,
            ResponseShape::SingleEntity(entity) => Ok(vec![entity]),
        }
    }

    /// Start a fluent request for a resource
    pub fn resource(&self, resource: impl Into<String>) -> ResourceRequest<'_> {
        ResourceRequest::new(self, resource)
    }

    /// Call a list accessor by its `get_<resource>` name
    pub async fn call(
        &self,
        accessor: &str,
        segments: &[String],
        query: &QueryParams,
    ) -> Result<ResultSet> {
        let resource = resource_from_accessor(accessor).ok_or_else(|| {
            Error::invalid_usage(format!("'{accessor}' is not a get_<resource> list accessor"))
        })?;
        self.fetch(resource, segments, query).await
    }

    /// Fetch and decode the site list
    pub async fn get_sites(&self) -> Result<Vec<Site>> {
        self.fetch("sites", &[], &QueryParams::new())
            .await?
            .into_iter()
            .map(|site| serde_json::from_value(site).map_err(Error::from))
            .collect()
    }

    /// Fetch one assessment by id from its detail view.
    ///
    /// Returns `None` when the body is not JSON.
    pub async fn get_assessment(&self, assessment_id: impl ToString) -> Result<Option<JsonValue>> {
        let segments = assessment_view_segments(&assessment_id.to_string());
        let Some(body) = self
            .http
            .get_json(ASSESSMENT_ENDPOINT, &segments, &QueryParams::new())
            .await?
        else {
            return Ok(None);
        };

        match classify(body)? {
            ResponseShape::SingleEntity(assessment) => Ok(Some(assessment)),
            other => Err(Error::unexpected_shape(format!(
                "expected a single assessment, got a {}",
                other.kind()
            ))),
        }
    }
}

impl std::fmt::Debug for Illuminate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Illuminate")
            .field("http", &self.http)
            .field("pagination", &self.paginator.mode())
            .field("district", &self.district)
            .field("sites", &self.sites.len())
            .finish()
    }
}

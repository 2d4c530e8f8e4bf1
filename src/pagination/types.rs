//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by both strategies.

use super::strategies::{ConcurrentPaginator, SequentialPaginator};
use crate::decode::PageEnvelope;
use crate::error::Result;
use crate::types::{JsonValue, QueryParams, ResultSet, MAX_LIMIT, PAGE_PARAM};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which completion strategy aggregates multi-page listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Fetch page 1, then every remaining page at once through the worker pool
    #[default]
    Concurrent,
    /// Fetch pages one after another until the last page
    Sequential,
}

impl PaginationMode {
    /// Build the paginator for this mode.
    ///
    /// `max_workers` bounds concurrent page requests; `page_size` is the
    /// `limit` sent when the caller gives none. Both only apply to
    /// [`PaginationMode::Concurrent`].
    pub fn paginator(self, max_workers: usize, page_size: u32) -> Arc<dyn Paginator> {
        match self {
            Self::Concurrent => Arc::new(ConcurrentPaginator::new(max_workers, page_size)),
            Self::Sequential => Arc::new(SequentialPaginator::new()),
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concurrent => write!(f, "concurrent"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for PaginationMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "concurrent" | "all" | "parallel" => Ok(Self::Concurrent),
            "sequential" | "serial" => Ok(Self::Sequential),
            other => Err(crate::error::Error::config(format!(
                "Unknown pagination mode '{other}' (expected 'concurrent' or 'sequential')"
            ))),
        }
    }
}

/// Something that can fetch one page of a listing.
///
/// Implemented by the HTTP layer for a concrete endpoint; tests provide
/// in-memory sources.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the listing with the given query parameters.
    ///
    /// `None` means the server answered with a body that is not JSON.
    async fn fetch_page(&self, query: &QueryParams) -> Result<Option<JsonValue>>;
}

/// Core trait for pagination strategies
#[async_trait]
pub trait Paginator: Send + Sync {
    /// Strategy implemented by this paginator
    fn mode(&self) -> PaginationMode;

    /// Query parameters for the first request of a listing.
    ///
    /// Fails with `InvalidUsage` when the caller's parameters conflict with
    /// the strategy; no request has been made at that point.
    fn initial_query(&self, query: &QueryParams) -> Result<QueryParams>;

    /// Fetch whatever pages remain after `first` and return all records in
    /// ascending page order.
    ///
    /// `query` is the query produced by [`Paginator::initial_query`].
    async fn collect(
        &self,
        source: &dyn PageSource,
        query: &QueryParams,
        first: PageEnvelope,
    ) -> Result<ResultSet>;
}

/// Copy of `query` with the page parameter set
pub fn with_page(query: &QueryParams, page: u32) -> QueryParams {
    let mut query = query.clone();
    query.insert(PAGE_PARAM.to_string(), page.to_string());
    query
}

/// Default page size for concurrent aggregation
pub fn default_page_size() -> u32 {
    MAX_LIMIT
}

//! Pagination strategy implementations
//!
//! Each strategy completes a listing whose first page has been fetched.

use super::types::{with_page, PageSource, PaginationMode, Paginator};
use crate::decode::{expect_envelope, PageEnvelope};
use crate::error::{Error, Result};
use crate::types::{QueryParams, ResultSet, LIMIT_PARAM, PAGE_PARAM};
use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

// ============================================================================
// Concurrent Pagination
// ============================================================================

/// Fetch-all-at-once pagination.
///
/// The first request asks for the largest page size and no page number.
/// Once it reports `num_pages`, pages `2..=num_pages` are requested
/// concurrently. At most `max_workers` page requests are in flight at a time
/// across every listing that shares this paginator.
#[derive(Debug, Clone)]
pub struct ConcurrentPaginator {
    /// Page size sent when the caller does not choose one
    pub page_size: u32,
    max_workers: usize,
    workers: Arc<Semaphore>,
}

impl ConcurrentPaginator {
    /// Create a paginator with a worker pool of `max_workers` permits
    pub fn new(max_workers: usize, page_size: u32) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            page_size,
            max_workers,
            workers: Arc::new(Semaphore::new(max_workers)),
        }
    }

    /// Size of the worker pool
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    async fn fetch_numbered(
        &self,
        source: &dyn PageSource,
        query: &QueryParams,
        page: u32,
    ) -> Result<(u32, ResultSet)> {
        let _permit = self
            .workers
            .acquire()
            .await
            .map_err(|e| Error::config(format!("Worker pool unavailable: {e}")))?;

        let envelope = expect_envelope(source.fetch_page(&with_page(query, page)).await?)?;
        debug!(
            "Got {} results from page {} (server reported page {}).",
            envelope.results.len(),
            page,
            envelope.page
        );
        Ok((page, envelope.results))
    }
}

#[async_trait]
impl Paginator for ConcurrentPaginator {
    fn mode(&self) -> PaginationMode {
        PaginationMode::Concurrent
    }

    fn initial_query(&self, query: &QueryParams) -> Result<QueryParams> {
        if query.contains_key(PAGE_PARAM) {
            return Err(Error::invalid_usage(
                "Cannot request a specific page while fetching all pages at once",
            ));
        }

        let mut query = query.clone();
        query
            .entry(LIMIT_PARAM.to_string())
            .or_insert_with(|| self.page_size.to_string());
        Ok(query)
    }

    async fn collect(
        &self,
        source: &dyn PageSource,
        query: &QueryParams,
        first: PageEnvelope,
    ) -> Result<ResultSet> {
        // num_pages can be 0 for empty listings
        if first.is_single_page() {
            debug!("Returning {} results.", first.results.len());
            return Ok(first.results);
        }

        if first.page != 1 {
            return Err(Error::protocol_fault(format!(
                "first response reported page {} of {}, expected page 1",
                first.page, first.num_pages
            )));
        }
        debug!("Got {} results from page 1.", first.results.len());

        let mut pending: FuturesUnordered<_> = (2..=first.num_pages)
            .map(|page| self.fetch_numbered(source, query, page))
            .collect();

        // Completion order is arbitrary; key by page number
        let mut pages = BTreeMap::new();
        while let Some(fetched) = pending.next().await {
            let (page, results) = fetched?;
            pages.insert(page, results);
        }

        let mut results = first.results;
        for page_results in pages.into_values() {
            results.extend(page_results);
        }

        debug!("Returning {} results.", results.len());
        Ok(results)
    }
}

// ============================================================================
// Sequential Pagination
// ============================================================================

/// Page-by-page pagination.
///
/// Uses the caller's parameters as-is (an explicit `page` is the starting
/// page) and follows `page + 1` until the server reports the last page.
/// One request is in flight at a time.
#[derive(Debug, Clone, Default)]
pub struct SequentialPaginator;

impl SequentialPaginator {
    /// Create a new sequential paginator
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Paginator for SequentialPaginator {
    fn mode(&self) -> PaginationMode {
        PaginationMode::Sequential
    }

    fn initial_query(&self, query: &QueryParams) -> Result<QueryParams> {
        Ok(query.clone())
    }

    async fn collect(
        &self,
        source: &dyn PageSource,
        query: &QueryParams,
        first: PageEnvelope,
    ) -> Result<ResultSet> {
        let mut requested = query.get(PAGE_PARAM).and_then(|p| p.parse::<u32>().ok());
        let mut is_first = true;
        let mut envelope = first;
        let mut results = ResultSet::new();

        loop {
            let page = envelope.page;
            let num_pages = envelope.num_pages;

            // The first response may come back as page 1 when no page was
            // asked for; every later one must echo the requested page.
            let echoes_request = Some(page) == requested || (is_first && page == 1);
            if num_pages > 1 && page < num_pages && !echoes_request {
                return Err(Error::protocol_fault(format!(
                    "requested page {} but server reported page {page} of {num_pages}",
                    requested.map_or_else(|| "1".to_string(), |p| p.to_string()),
                )));
            }

            debug!("Got {} results from page {page}.", envelope.results.len());
            results.extend(envelope.results);

            if num_pages <= 1 || page >= num_pages {
                break;
            }

            let next = page + 1;
            requested = Some(next);
            is_first = false;
            envelope = expect_envelope(source.fetch_page(&with_page(query, next)).await?)?;
        }

        debug!("Returning {} results.", results.len());
        Ok(results)
    }
}

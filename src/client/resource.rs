//! Fluent resource requests

use super::Illuminate;
use crate::error::Result;
use crate::types::{QueryParams, ResultSet};

/// A pending listing request, built up before it is sent.
///
/// ```rust,ignore
/// let enrollments = client
///     .resource("student_enrollments")
///     .segment(12)
///     .param("academic_year", 2024)
///     .fetch()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ResourceRequest<'a> {
    client: &'a Illuminate,
    resource: String,
    segments: Vec<String>,
    query: QueryParams,
}

impl<'a> ResourceRequest<'a> {
    pub(crate) fn new(client: &'a Illuminate, resource: impl Into<String>) -> Self {
        Self {
            client,
            resource: resource.into(),
            segments: Vec::new(),
            query: QueryParams::new(),
        }
    }

    /// Append a path segment after the endpoint name
    #[must_use]
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Add several query parameters
    #[must_use]
    pub fn params<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in params {
            self.query.insert(key.into(), value.to_string());
        }
        self
    }

    /// Resource token this request targets
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Send the request and aggregate every page
    pub async fn fetch(self) -> Result<ResultSet> {
        self.client
            .fetch(&self.resource, &self.segments, &self.query)
            .await
    }
}

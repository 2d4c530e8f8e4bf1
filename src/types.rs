//! Common types used throughout the Illuminate client
//!
//! This module contains shared type aliases used across multiple modules.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Query parameters forwarded to the API.
///
/// Ordered so that request URLs and signature base strings are deterministic.
pub type QueryParams = BTreeMap<String, String>;

/// Fully aggregated records returned by every resource accessor
pub type ResultSet = Vec<JsonValue>;

// ============================================================================
// Reserved Parameters
// ============================================================================

/// Query parameter carrying the requested page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

/// Largest page size the API accepts
pub const MAX_LIMIT: u32 = 200;

/// Build query parameters from key/value pairs
pub fn query_params<K, V, I>(pairs: I) -> QueryParams
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

//! Response shape types
//!
//! Defines the three body shapes the API is known to return.

use crate::types::{JsonValue, ResultSet};
use serde::{Deserialize, Serialize};

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    /// Total number of pages reported by the server (0 for empty listings)
    pub num_pages: u32,
    /// Page number this envelope carries
    pub page: u32,
    /// Total number of results across all pages
    #[serde(default)]
    pub num_results: u64,
    /// Records on this page
    pub results: ResultSet,
}

impl PageEnvelope {
    /// Whether the server reports no pages beyond this one
    pub fn is_single_page(&self) -> bool {
        self.num_pages <= 1
    }
}

/// Classified response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// The body is itself a list of records
    BareList(ResultSet),
    /// A page of results with pagination metadata
    Paginated(PageEnvelope),
    /// A single-entity detail envelope, already unwrapped
    SingleEntity(JsonValue),
}

impl ResponseShape {
    /// Short name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BareList(_) => "bare list",
            Self::Paginated(_) => "paginated envelope",
            Self::SingleEntity(_) => "single entity",
        }
    }
}

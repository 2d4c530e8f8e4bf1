//! Pagination module
//!
//! Supports: concurrent (fetch all at once), sequential (page by page)
//!
//! # Overview
//!
//! Listing endpoints answer with an envelope carrying `num_pages`, `page`
//! and a `results` array. Both strategies take the first envelope, fetch the
//! remaining pages and return one flat list ordered by page number, then by
//! position within the page.

mod strategies;
mod types;

pub use strategies::{ConcurrentPaginator, SequentialPaginator};
pub use types::{default_page_size, with_page, PageSource, PaginationMode, Paginator};

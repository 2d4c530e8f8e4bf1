//! Response decoder module
//!
//! Supports: bare lists, paginated envelopes, single-entity envelopes
//!
//! # Overview
//!
//! The decode module inspects a JSON body and decides which of the known
//! shapes it is. Paginated envelopes are handed on to the pagination module.

mod classifier;
mod types;

pub use classifier::{classify, expect_envelope};
pub use types::{PageEnvelope, ResponseShape};

#[cfg(test)]
mod tests;

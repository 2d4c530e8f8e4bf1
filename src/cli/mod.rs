//! CLI module
//!
//! Command-line interface for querying an Illuminate instance.
//!
//! # Commands
//!
//! - `fetch` - Fetch every record of a resource listing
//! - `assessment` - Fetch one assessment detail view
//! - `sites` - List the sites visible to the credentials
//! - `district` - Print the district derived from the sites

mod commands;
mod runner;

pub use commands::{Cli, Commands, PaginationArg};
pub use runner::Runner;

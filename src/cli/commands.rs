//! CLI commands and argument parsing

use crate::pagination::PaginationMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Illuminate Education API client
#[derive(Parser, Debug)]
#[command(name = "illuminate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML). Falls back to ILLUMINATE_* variables.
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Pagination strategy for paginated listings
    #[arg(long, global = true)]
    pub pagination: Option<PaginationArg>,

    /// Maximum concurrent page requests
    #[arg(long, global = true)]
    pub max_workers: Option<usize>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every record of a resource listing
    Fetch {
        /// Resource token (`student_data`) or accessor name (`get_student_data`)
        resource: String,

        /// Extra path segments appended after the endpoint name
        segments: Vec<String>,

        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Fetch one assessment by id
    Assessment {
        /// Assessment id
        id: String,
    },

    /// List sites visible to the credentials
    Sites,

    /// Print the district derived from the site list
    District,
}

/// Pagination strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaginationArg {
    /// Request every remaining page at once through the worker pool
    Concurrent,
    /// Follow pages one after another
    Sequential,
}

impl From<PaginationArg> for PaginationMode {
    fn from(arg: PaginationArg) -> Self {
        match arg {
            PaginationArg::Concurrent => Self::Concurrent,
            PaginationArg::Sequential => Self::Sequential,
        }
    }
}

fn parse_key_val(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

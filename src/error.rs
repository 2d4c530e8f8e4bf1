//! Error types for the Illuminate client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Illuminate client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Unable to connect to {base_url} - are you sure the subdomain is correct?")]
    ConnectionFailure {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unable to authenticate - are you sure the API credentials are correct?")]
    AuthenticationFailure,

    #[error("No such resource {path} - are you sure the endpoint is correct?")]
    ResourceNotFound { path: String },

    #[error("HTTP {status}: {body}")]
    UnexpectedHttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Unexpected response format from Illuminate: {body}")]
    UnexpectedResponseShape { body: String },

    #[error("Pagination protocol fault: {message}")]
    ProtocolFault { message: String },

    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("Invalid usage: {message}")]
    InvalidUsage { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid usage error
    pub fn invalid_usage(message: impl Into<String>) -> Self {
        Self::InvalidUsage {
            message: message.into(),
        }
    }

    /// Create a pagination protocol fault
    pub fn protocol_fault(message: impl Into<String>) -> Self {
        Self::ProtocolFault {
            message: message.into(),
        }
    }

    /// Create an unexpected response shape error from the offending body
    pub fn unexpected_shape(body: impl Into<String>) -> Self {
        Self::UnexpectedResponseShape { body: body.into() }
    }

    /// Create an unexpected HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedHttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not found error for a relative path
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::ResourceNotFound { path: path.into() }
    }
}

/// Result type alias for the Illuminate client
pub type Result<T> = std::result::Result<T, Error>;

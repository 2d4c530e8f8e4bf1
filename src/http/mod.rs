//! HTTP client module
//!
//! Provides the signed request executor for the Illuminate API.
//!
//! # Features
//!
//! - **OAuth1 Signing**: every request carries a fresh signature
//! - **URL Construction**: base URL + resource path + extra path segments
//! - **Error Normalization**: connection, 401, 404 and other statuses map to
//!   distinct error kinds
//! - **Lenient Decoding**: non-JSON bodies are logged and yield no data

mod client;

pub use client::{Endpoint, HttpClient, HttpClientConfig, HttpClientConfigBuilder};

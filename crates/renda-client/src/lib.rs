//! # renda-client
//!
//! Typed HTTP client for the emissões REST API. A thin wrapper: no retry,
//! no caching, no backoff. Every request carries the configured timeout, and
//! errors are classified into the four kinds callers handle (transport,
//! timeout, field validation, business rule).

pub mod emissoes;
pub mod stats;

mod error;
mod http;

pub use error::{ApiError, FieldError, LocPart};

use std::time::Duration;

/// HTTP client bound to one emissões API endpoint.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a bounded per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("renda/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

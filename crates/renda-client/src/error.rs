//! API client error taxonomy.
//!
//! Four kinds, matching how callers react to them: transport failures
//! (timeouts distinguished), structured field-level validation failures,
//! single-message business-rule failures, and everything else.

use serde::Deserialize;
use thiserror::Error;

/// Errors from the emissões API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (unreachable, connection reset, decode).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Backend rejected the payload with field-level validation errors.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Backend reported a single business-rule failure message.
    #[error("{0}")]
    Business(String),

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}

/// One segment of a validation error location path (e.g. `["body", "valor"]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocPart {
    Key(String),
    Index(u64),
}

/// A single field-level validation error from a 422 response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    pub loc: Vec<LocPart>,
    pub msg: String,
}

impl FieldError {
    /// The form field this error belongs to: the last named segment of the
    /// location path.
    #[must_use]
    pub fn campo(&self) -> Option<&str> {
        self.loc.iter().rev().find_map(|part| match part {
            LocPart::Key(key) => Some(key.as_str()),
            LocPart::Index(_) => None,
        })
    }
}

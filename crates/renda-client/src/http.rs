//! Shared HTTP response handling.
//!
//! Centralizes status-code checks so the operation modules stay focused on
//! request construction and response mapping. Non-success bodies are decoded
//! following the backend's `detail` convention: an array of location/message
//! pairs → [`ApiError::Validation`], a plain string → [`ApiError::Business`],
//! anything else → [`ApiError::Api`].

use serde::Deserialize;

use crate::error::{ApiError, FieldError};

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Fields(Vec<FieldError>),
    Message(String),
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(classify_error(status.as_u16(), &body))
}

/// Map a non-success status and body to the error taxonomy.
fn classify_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => match parsed.detail {
            Detail::Fields(fields) => ApiError::Validation(fields),
            Detail::Message(message) => ApiError::Business(message),
        },
        Err(_) => ApiError::Api {
            status,
            message: body.to_string(),
        },
    }
}

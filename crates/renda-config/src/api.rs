//! Emissões API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default API base URL (the backend's local development bind).
fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default listing page size.
const fn default_page_size() -> u32 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the emissões REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on every request. Requests past this become a timeout error.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed page size for the issuance listing.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl ApiConfig {
    /// Validate field values after layering.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty base URL or a zero
    /// timeout/page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.page_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.page_size, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let config = ApiConfig {
            base_url: "  ".into(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let config = ApiConfig {
            page_size: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

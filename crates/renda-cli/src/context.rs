use std::time::Duration;

use renda_client::ApiClient;
use renda_config::RendaConfig;

/// Shared handles for command handlers.
pub struct AppContext {
    pub client: ApiClient,
    pub page_size: u32,
}

impl AppContext {
    #[must_use]
    pub fn new(config: &RendaConfig) -> Self {
        let client = ApiClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        );
        Self {
            client,
            page_size: config.api.page_size,
        }
    }
}

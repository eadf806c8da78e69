use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::info;

use crate::config::ClientConfig;
use super::client::HttpTranslationClient;
use super::interface::TranslationClient;

/// Factory for translation clients
pub struct TranslationClientFactory;

impl TranslationClientFactory {
    /// Create a translation client from configuration
    ///
    /// # Arguments
    /// * `client_config` - endpoint and transport settings
    ///
    /// # Returns
    /// Shared `TranslationClient` implementation
    pub fn create_client(client_config: &ClientConfig) -> Result<Arc<dyn TranslationClient>> {
        info!(
            "Initializing translation client: base_url={}, timeout={:?}",
            client_config.base_url, client_config.request_timeout_secs
        );

        let client = match client_config.request_timeout_secs {
            Some(secs) => HttpTranslationClient::with_timeout(
                client_config.base_url.clone(),
                Duration::from_secs(secs),
            )?,
            None => HttpTranslationClient::new(client_config.base_url.clone()),
        };

        Ok(Arc::new(client))
    }
}

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::interface::{ErrorResponse, TranslateRequest, TranslateResponse, TranslationClient};
use crate::error::TranslateError;

/// HTTP client for the `/translate` endpoint
#[derive(Debug, Clone)]
pub struct HttpTranslationClient {
    client: Client,
    base_url: String,
}

impl HttpTranslationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[async_trait]
impl TranslationClient for HttpTranslationClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        let url = self.endpoint();
        debug!("Sending translation request: url={}, target_lang={}", url, request.target_lang);

        // .json() sets Content-Type: application/json
        let response = self.client.post(&url).json(request).send().await.map_err(|e| {
            error!("Translation request failed: {}", e);
            TranslateError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read translation response body: {}", e);
            TranslateError::from(e)
        })?;

        if status.is_success() {
            let result: TranslateResponse = serde_json::from_str(&body).map_err(|e| {
                error!("Undecodable translation response: {}", e);
                TranslateError::from(e)
            })?;
            debug!("Translation succeeded: detected_language={}", result.detected_language);
            Ok(result)
        } else {
            let payload: ErrorResponse = serde_json::from_str(&body).map_err(|e| {
                error!("Undecodable error response (status {}): {}", status, e);
                TranslateError::from(e)
            })?;
            let message = payload
                .error
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            error!("Translation server returned {}: {}", status, message);
            Err(TranslateError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

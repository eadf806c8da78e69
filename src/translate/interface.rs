use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Body of `POST /translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

/// Success body of `POST /translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub detected_language: String,
    /// Echo of the submitted text; some backends omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Translation client interface - the backend itself lives behind HTTP
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Send one translation request and wait for its outcome
    ///
    /// # Returns
    /// The decoded success body, or a `TranslateError` classifying why
    /// no translation was produced
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError>;
}

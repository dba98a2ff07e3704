//! Provider trait and implementations for language-model backends

pub mod google;
pub mod openai;

use async_trait::async_trait;
use secrecy::SecretString;
use url::Url;

pub use google::GoogleProvider;
pub use openai::OpenAiProvider;

use crate::error::LlmError;
use crate::types::{CompletionRequest, CompletionResponse};

/// Trait implemented by each language-model backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Configured provider name, used in logs
    fn name(&self) -> &str;

    /// Model every request is sent to
    fn model(&self) -> &str;

    /// Send a single-turn completion request
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Connection and sampling settings shared by every provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// API key; empty or absent keys are not sent
    pub api_key: Option<SecretString>,
    /// Base URL override
    pub base_url: Option<Url>,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: Option<f64>,
    /// Maximum output tokens
    pub max_output_tokens: Option<u32>,
}

impl ProviderSettings {
    /// Settings with only a model and key, as used by transcription and OCR
    pub fn new(model: impl Into<String>, api_key: Option<SecretString>, base_url: Option<Url>) -> Self {
        Self {
            api_key,
            base_url,
            model: model.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// Turn a failed upstream response into an [`LlmError`]
async fn upstream_error(provider: &str, response: reqwest::Response) -> LlmError {
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_owned());

    let message = serde_json::from_str::<crate::protocol::google::GoogleErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    tracing::error!(provider, %status, "upstream returned error: {message}");

    LlmError::from_status(status.as_u16(), message)
}

/// Map a transport failure, logging it once
fn connection_error(provider: &str, error: &reqwest::Error) -> LlmError {
    tracing::error!(provider, error = %error, "upstream request failed");
    LlmError::ConnectionError(format!("Failed to send request to {provider}: {error}"))
}

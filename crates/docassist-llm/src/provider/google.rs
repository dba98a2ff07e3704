//! Google Generative Language API provider implementation

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use secrecy::SecretString;
use url::Url;

use super::{Provider, ProviderSettings, connection_error, upstream_error};
use crate::error::LlmError;
use crate::protocol::google::{
    GoogleContent, GoogleGenerationConfig, GoogleInlineData, GooglePart, GoogleRequest, GoogleResponse,
};
use crate::types::{CompletionRequest, CompletionResponse, ContentPart, Usage};

/// Google Generative Language API provider
pub struct GoogleProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model: String,
    generation_config: Option<GoogleGenerationConfig>,
}

impl GoogleProvider {
    /// Create from provider settings
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Internal` if the default base URL fails to parse
    pub fn new(name: impl Into<String>, settings: ProviderSettings) -> Result<Self, LlmError> {
        let base_url = match settings.base_url {
            Some(url) => url,
            None => Url::parse(docassist_config::GOOGLE_API_BASE_URL)
                .map_err(|e| LlmError::Internal(anyhow::anyhow!("invalid default Google base URL: {e}")))?,
        };

        let generation_config = (settings.temperature.is_some() || settings.max_output_tokens.is_some()).then(|| {
            GoogleGenerationConfig {
                temperature: settings.temperature,
                max_output_tokens: settings.max_output_tokens,
            }
        });

        Ok(Self {
            name: name.into(),
            client: docassist_core::http_client(),
            base_url,
            api_key: settings.api_key,
            model: settings.model,
            generation_config,
        })
    }

    /// Build the `generateContent` endpoint URL for the configured model
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.model)
    }

    fn wire_request(&self, request: &CompletionRequest) -> GoogleRequest {
        let parts = request
            .parts
            .iter()
            .map(|part| match part {
                ContentPart::Text(text) => GooglePart::Text(text.clone()),
                ContentPart::Inline { mime_type, data } => GooglePart::InlineData(GoogleInlineData {
                    mime_type: mime_type.clone(),
                    data: STANDARD.encode(data),
                }),
            })
            .collect();

        GoogleRequest {
            contents: vec![GoogleContent {
                role: Some("user".to_owned()),
                parts,
            }],
            generation_config: self.generation_config.clone(),
        }
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let wire_request = self.wire_request(request);

        let mut builder = self.client.post(self.generate_url()).json(&wire_request);

        if let Some(key) = docassist_core::non_empty_secret(self.api_key.as_ref()) {
            builder = builder.header("x-goog-api-key", key);
        }

        tracing::debug!(provider = %self.name, model = %self.model, parts = request.parts.len(), "Gemini request");

        let response = builder.send().await.map_err(|e| connection_error(&self.name, &e))?;

        if !response.status().is_success() {
            return Err(upstream_error(&self.name, response).await);
        }

        let wire_response: GoogleResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, "Failed to parse Gemini response: {e}");
            LlmError::Internal(anyhow::anyhow!("failed to parse Gemini response: {e}"))
        })?;

        let Some(text) = wire_response.first_text() else {
            return Err(LlmError::EmptyResponse(wire_response.refusal_reason()));
        };

        let usage = wire_response.usage_metadata.map(|u| Usage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        if let Some(usage) = usage {
            tracing::debug!(
                provider = %self.name,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Gemini request complete"
            );
        }

        Ok(CompletionResponse {
            text,
            model: self.model.clone(),
            usage,
        })
    }
}

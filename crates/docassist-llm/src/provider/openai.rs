//! `OpenAI`-compatible chat completions provider
//!
//! Works against hosted `OpenAI` and local servers that speak the same API.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use secrecy::SecretString;
use url::Url;

use super::{Provider, ProviderSettings, connection_error, upstream_error};
use crate::error::LlmError;
use crate::protocol::openai::{
    OpenAiContent, OpenAiContentPart, OpenAiImageUrl, OpenAiMessage, OpenAiRequest, OpenAiResponse,
};
use crate::types::{CompletionRequest, CompletionResponse, ContentPart, Usage};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI`-compatible provider
pub struct OpenAiProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model: String,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl OpenAiProvider {
    /// Create from provider settings
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Internal` if the default base URL fails to parse
    pub fn new(name: impl Into<String>, settings: ProviderSettings) -> Result<Self, LlmError> {
        let base_url = match settings.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_OPENAI_API_URL)
                .map_err(|e| LlmError::Internal(anyhow::anyhow!("invalid default OpenAI base URL: {e}")))?,
        };

        Ok(Self {
            name: name.into(),
            client: docassist_core::http_client(),
            base_url,
            api_key: settings.api_key,
            model: settings.model,
            temperature: settings.temperature,
            max_tokens: settings.max_output_tokens,
        })
    }

    fn wire_request(&self, request: &CompletionRequest) -> Result<OpenAiRequest, LlmError> {
        let content = match request.parts.as_slice() {
            [ContentPart::Text(text)] => OpenAiContent::Text(text.clone()),
            parts => OpenAiContent::Parts(parts.iter().map(content_part).collect::<Result<_, _>>()?),
        };

        Ok(OpenAiRequest {
            model: self.model.clone(),
            messages: vec![OpenAiMessage {
                role: "user".to_owned(),
                content,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }
}

fn content_part(part: &ContentPart) -> Result<OpenAiContentPart, LlmError> {
    match part {
        ContentPart::Text(text) => Ok(OpenAiContentPart::Text { text: text.clone() }),
        // Inline content is limited to images
        ContentPart::Inline { mime_type, data } if mime_type.starts_with("image/") => Ok(OpenAiContentPart::ImageUrl {
            image_url: OpenAiImageUrl {
                url: format!("data:{mime_type};base64,{}", STANDARD.encode(data)),
            },
        }),
        ContentPart::Inline { mime_type, .. } => Err(LlmError::InvalidRequest(format!(
            "Unsupported inline content type: {mime_type}"
        ))),
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let wire_request = self.wire_request(request)?;
        let url = format!("{}/chat/completions", self.base_url.as_str().trim_end_matches('/'));

        let mut builder = self.client.post(&url).json(&wire_request);

        if let Some(key) = docassist_core::non_empty_secret(self.api_key.as_ref()) {
            builder = builder.bearer_auth(key);
        }

        tracing::debug!(provider = %self.name, model = %self.model, "chat completion request");

        let response = builder.send().await.map_err(|e| connection_error(&self.name, &e))?;

        if !response.status().is_success() {
            return Err(upstream_error(&self.name, response).await);
        }

        let wire_response: OpenAiResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, "Failed to parse chat completion response: {e}");
            LlmError::Internal(anyhow::anyhow!("failed to parse chat completion response: {e}"))
        })?;

        let choice = wire_response.choices.into_iter().next();
        let finish_reason = choice.as_ref().and_then(|c| c.finish_reason.clone());

        let Some(text) = choice.and_then(|c| c.message.content).filter(|t| !t.is_empty()) else {
            return Err(LlmError::EmptyResponse(
                finish_reason.map_or_else(|| "no choices".to_owned(), |r| format!("finish reason {r}")),
            ));
        };

        Ok(CompletionResponse {
            text,
            model: wire_response.model.unwrap_or_else(|| self.model.clone()),
            usage: wire_response.usage.map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            }),
        })
    }
}

use async_trait::async_trait;
use reqwest::Client;
use secrecy::SecretString;
use url::Url;

use crate::{
    error::SttError,
    types::{TranscriptionRequest, TranscriptionResponse},
};

use super::SttProvider;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// `OpenAI`-compatible Whisper provider
///
/// Talks to the hosted API or to any self-hosted server exposing
/// `/audio/transcriptions`.
pub(crate) struct WhisperProvider {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    language: Option<String>,
    name: String,
}

impl WhisperProvider {
    pub fn new(
        name: String,
        api_key: Option<SecretString>,
        base_url: Option<Url>,
        model: Option<String>,
        language: Option<String>,
    ) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_OPENAI_API_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client: docassist_core::http_client(),
            base_url,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            language,
            name,
        }
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl SttProvider for WhisperProvider {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(
            "Whisper transcription request: {} bytes, model={}",
            request.audio.len(),
            self.model,
        );

        let part = reqwest::multipart::Part::bytes(request.audio.to_vec())
            .file_name(request.filename)
            .mime_str(&request.content_type)
            .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        let mut builder = self.client.post(&url).multipart(form);

        if let Some(key) = docassist_core::non_empty_secret(self.api_key.as_ref()) {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Whisper request failed: {e}");
            SttError::ConnectionError(format!("Failed to send request to Whisper: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Whisper API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => SttError::AuthenticationFailed(error_text),
                400 => SttError::InvalidRequest(error_text),
                _ => SttError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Whisper response: {e}");
            SttError::InternalError(None)
        })?;

        tracing::debug!("Whisper transcription complete");

        Ok(TranscriptionResponse { text: result.text })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

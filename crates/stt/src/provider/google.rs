use async_trait::async_trait;
use docassist_llm::{CompletionRequest, GoogleProvider, Provider, provider::ProviderSettings};
use secrecy::SecretString;
use url::Url;

use crate::types::{TranscriptionRequest, TranscriptionResponse};

use super::SttProvider;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini transcription: the audio is sent inline with an instruction
pub(crate) struct GeminiSttProvider {
    inner: GoogleProvider,
    language: Option<String>,
    name: String,
}

impl GeminiSttProvider {
    pub fn new(
        name: String,
        api_key: Option<SecretString>,
        base_url: Option<Url>,
        model: Option<String>,
        language: Option<String>,
    ) -> crate::error::Result<Self> {
        let settings = ProviderSettings::new(model.as_deref().unwrap_or(DEFAULT_MODEL), api_key, base_url);
        let inner = GoogleProvider::new(name.clone(), settings)?;

        Ok(Self { inner, language, name })
    }

    fn instruction(&self) -> String {
        let mut instruction = String::from(
            "Generate a verbatim transcript of the speech in this recording. \
             Respond with the transcript text only.",
        );

        if let Some(language) = &self.language {
            instruction.push_str(&format!(" The spoken language is '{language}'."));
        }

        instruction
    }
}

#[async_trait]
impl SttProvider for GeminiSttProvider {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        tracing::debug!(
            "Gemini transcription request: {} bytes, type={}, model={}",
            request.audio.len(),
            request.content_type,
            self.inner.model(),
        );

        let completion = CompletionRequest::inline(request.content_type, request.audio, self.instruction());
        let response = self.inner.complete(&completion).await?;

        tracing::debug!("Gemini transcription complete");

        Ok(TranscriptionResponse {
            text: response.text.trim().to_owned(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use async_trait::async_trait;
use docassist_config::OcrConfig;
use docassist_llm::{CompletionRequest, GoogleProvider, LlmError, OpenAiProvider, Provider, provider::ProviderSettings};

use crate::types::OcrRequest;

use super::OcrProvider;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const INSTRUCTION: &str = "Extract all text visible in this image, such as a printed or handwritten medical report. \
                           Respond with the extracted text only, preserving line breaks.";

/// OCR through a multimodal completion model
///
/// The image is sent inline next to a fixed extraction instruction.
pub(crate) struct VisionOcrProvider {
    inner: Box<dyn Provider>,
}

impl VisionOcrProvider {
    /// Gemini `generateContent`
    pub fn gemini(config: &OcrConfig) -> crate::error::Result<Self> {
        let settings = settings(config, DEFAULT_GEMINI_MODEL);

        Ok(Self {
            inner: Box::new(GoogleProvider::new("google", settings)?),
        })
    }

    /// `OpenAI`-compatible chat completions, the image sent as a `data:` URL
    pub fn openai(config: &OcrConfig) -> crate::error::Result<Self> {
        let settings = settings(config, DEFAULT_OPENAI_MODEL);

        Ok(Self {
            inner: Box::new(OpenAiProvider::new("openai", settings)?),
        })
    }
}

fn settings(config: &OcrConfig, default_model: &str) -> ProviderSettings {
    ProviderSettings::new(
        config.model.as_deref().unwrap_or(default_model),
        config.api_key.clone(),
        config.base_url.clone(),
    )
}

#[async_trait]
impl OcrProvider for VisionOcrProvider {
    async fn extract(&self, request: OcrRequest) -> crate::error::Result<String> {
        tracing::debug!(
            "{} OCR request: {} bytes, type={}, model={}",
            self.inner.name(),
            request.image.len(),
            request.content_type,
            self.inner.model(),
        );

        let completion = CompletionRequest::inline(request.content_type, request.image, INSTRUCTION);

        match self.inner.complete(&completion).await {
            Ok(response) => Ok(response.text.trim().to_owned()),
            // An image without text yields no candidate text
            Err(LlmError::EmptyResponse(reason)) => {
                tracing::debug!("{} OCR found no text: {reason}", self.inner.name());
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

use docassist_config::{OcrConfig, OcrProviderType};

use crate::{
    provider::{OcrProvider, tesseract::TesseractProvider, vision::VisionOcrProvider},
    types::OcrRequest,
};

/// Text extractor backed by the configured OCR engine
pub struct Server {
    provider: Box<dyn OcrProvider>,
}

impl Server {
    /// Extract text from an image
    ///
    /// Every provider returns its output with surrounding whitespace trimmed.
    /// A page with no text, or only whitespace, yields an empty string rather
    /// than an error, so the workflow skips summarization for it.
    pub async fn extract_text(&self, request: OcrRequest) -> crate::error::Result<String> {
        tracing::debug!(provider = self.provider.name(), filename = %request.filename, "extracting text");

        self.provider.extract(request).await
    }
}

/// Builder for constructing the OCR server from configuration
pub struct OcrServerBuilder<'a> {
    config: &'a OcrConfig,
}

impl<'a> OcrServerBuilder<'a> {
    pub fn new(config: &'a OcrConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let provider: Box<dyn OcrProvider> = match self.config.provider_type {
            OcrProviderType::Tesseract => Box::new(TesseractProvider::new(
                self.config.command.clone(),
                self.config.language.clone(),
            )),
            OcrProviderType::Google => Box::new(VisionOcrProvider::gemini(self.config)?),
            OcrProviderType::Openai => Box::new(VisionOcrProvider::openai(self.config)?),
        };

        tracing::debug!(provider = provider.name(), "OCR server initialized");

        Ok(Server { provider })
    }
}

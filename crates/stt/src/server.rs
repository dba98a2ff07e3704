use docassist_config::{SttConfig, SttProviderType};

use crate::{
    error::SttError,
    provider::{SttProvider, google::GeminiSttProvider, whisper::WhisperProvider},
    types::{TranscriptionRequest, TranscriptionResponse},
};

/// STT server that hands audio to the configured provider
pub struct Server {
    providers: Vec<Box<dyn SttProvider>>,
    default_provider: Option<String>,
}

impl Server {
    /// Transcribe audio with the default provider
    ///
    /// The default is `stt.default_provider` when set, otherwise the first
    /// configured provider.
    pub async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let provider = match &self.default_provider {
            Some(name) => self
                .providers
                .iter()
                .find(|p| p.name() == name)
                .ok_or_else(|| SttError::ProviderNotFound(name.clone()))?,
            None => self
                .providers
                .first()
                .ok_or(SttError::NoProviders)?,
        };

        tracing::debug!(provider = provider.name(), filename = %request.filename, "transcribing upload");

        provider.transcribe(request).await
    }
}

/// Builder for constructing the STT server from configuration
pub struct SttServerBuilder<'a> {
    config: &'a SttConfig,
}

impl<'a> SttServerBuilder<'a> {
    pub fn new(config: &'a SttConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let mut providers: Vec<Box<dyn SttProvider>> = Vec::new();

        for (name, provider_config) in &self.config.providers {
            tracing::debug!("Initializing STT provider: {name}");

            let provider: Box<dyn SttProvider> = match provider_config.provider_type {
                SttProviderType::Whisper => Box::new(WhisperProvider::new(
                    name.clone(),
                    provider_config.api_key.clone(),
                    provider_config.base_url.clone(),
                    provider_config.model.clone(),
                    provider_config.language.clone(),
                )),
                SttProviderType::Google => Box::new(GeminiSttProvider::new(
                    name.clone(),
                    provider_config.api_key.clone(),
                    provider_config.base_url.clone(),
                    provider_config.model.clone(),
                    provider_config.language.clone(),
                )?),
            };

            providers.push(provider);
        }

        if let Some(ref name) = self.config.default_provider
            && !providers.iter().any(|p| p.name() == name)
        {
            return Err(SttError::ConfigError(format!("default STT provider '{name}' is not configured")));
        }

        if providers.is_empty() {
            tracing::warn!("No STT providers configured, transcription requests will fail");
        } else {
            tracing::debug!("STT server initialized with {} provider(s)", providers.len());
        }

        Ok(Server {
            providers,
            default_provider: self.config.default_provider.clone(),
        })
    }
}

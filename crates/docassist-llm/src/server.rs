use docassist_config::{LlmConfig, LlmProviderType};

use crate::{
    error::Result,
    provider::{GoogleProvider, OpenAiProvider, Provider, ProviderSettings},
    types::CompletionRequest,
};

/// Chat responder and summarizer over one language-model provider
pub struct Server {
    provider: Box<dyn Provider>,
}

impl Server {
    /// Wrap an already constructed provider
    pub fn with_provider(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Send `prompt` unchanged and return the model's reply
    pub async fn reply(&self, prompt: &str) -> Result<String> {
        let response = self.provider.complete(&CompletionRequest::text(prompt)).await?;

        tracing::debug!(provider = self.provider.name(), model = %response.model, "chat reply received");

        Ok(response.text)
    }

    /// Summarize a medical report
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let response = self.provider.complete(&CompletionRequest::text(summary_prompt(text))).await?;

        tracing::debug!(provider = self.provider.name(), model = %response.model, "summary received");

        Ok(response.text)
    }
}

/// Prompt sent to the model for `/summarize` and the workflow's summary stage
pub fn summary_prompt(text: &str) -> String {
    format!("Summarize the following medical report:\n{text}")
}

/// Builder for constructing the LLM server from configuration
pub struct LlmServerBuilder<'a> {
    config: &'a LlmConfig,
}

impl<'a> LlmServerBuilder<'a> {
    pub fn new(config: &'a LlmConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<Server> {
        let settings = ProviderSettings {
            api_key: self.config.api_key.clone(),
            base_url: self.config.base_url.clone(),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        };

        let provider: Box<dyn Provider> = match self.config.provider_type {
            LlmProviderType::Google => Box::new(GoogleProvider::new("google", settings)?),
            LlmProviderType::Openai => Box::new(OpenAiProvider::new("openai", settings)?),
        };

        tracing::debug!(provider = provider.name(), model = provider.model(), "LLM server initialized");

        Ok(Server::with_provider(provider))
    }
}

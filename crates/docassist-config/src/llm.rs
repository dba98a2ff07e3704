use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat responder and summarizer configuration
///
/// Both collaborators share one provider.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Provider protocol type
    #[serde(rename = "type", default)]
    pub provider_type: LlmProviderType,
    /// API key, validated by the upstream at call time
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model name sent to the provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Maximum output tokens
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider_type: LlmProviderType::default(),
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// Supported LLM provider protocols
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProviderType {
    /// Google Generative Language API
    #[default]
    Google,
    /// OpenAI-compatible chat completions API
    Openai,
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level STT configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Provider used when a request does not name one; the first
    /// configured provider when unset
    #[serde(default)]
    pub default_provider: Option<String>,
    /// STT provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, SttProviderConfig>,
}

/// Configuration for a single STT provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: SttProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model override (e.g. "whisper-1" or "gemini-1.5-flash")
    #[serde(default)]
    pub model: Option<String>,
    /// Language hint (ISO 639-1)
    #[serde(default)]
    pub language: Option<String>,
}

/// Supported STT providers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SttProviderType {
    /// `OpenAI`-compatible `/audio/transcriptions`, hosted or self-hosted Whisper
    Whisper,
    /// Google Gemini with inline audio
    Google,
}

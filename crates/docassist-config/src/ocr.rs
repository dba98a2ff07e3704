use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Text extractor configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OcrConfig {
    /// Provider type
    #[serde(rename = "type", default)]
    pub provider_type: OcrProviderType,
    /// Tesseract executable, looked up on `PATH` when not absolute
    #[serde(default)]
    pub command: Option<String>,
    /// Tesseract language pack (e.g. "eng")
    #[serde(default)]
    pub language: Option<String>,
    /// API key for vision providers
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for vision providers
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model override for vision providers
    #[serde(default)]
    pub model: Option<String>,
}

/// Supported OCR providers
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrProviderType {
    /// Local Tesseract executable
    #[default]
    Tesseract,
    /// Google Gemini vision
    Google,
    /// `OpenAI`-compatible vision model (hosted or local)
    Openai,
}

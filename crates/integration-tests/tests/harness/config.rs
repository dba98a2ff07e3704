//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use docassist_config::{
    Config, CorsConfig, HealthConfig, LlmConfig, LlmProviderType, OcrConfig, OcrProviderType, ServerConfig,
    SttProviderConfig, SttProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point transcription, chat, summarization and OCR at a mock Gemini API
    pub fn with_gemini(self, base_url: &str) -> Self {
        self.with_gemini_stt("gemini", base_url)
            .with_gemini_llm(base_url)
            .with_gemini_ocr(base_url)
    }

    /// Add a Gemini transcription provider
    pub fn with_gemini_stt(mut self, name: &str, base_url: &str) -> Self {
        self.config.stt.providers.insert(
            name.to_owned(),
            SttProviderConfig {
                provider_type: SttProviderType::Google,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.parse().expect("valid URL")),
                model: None,
                language: None,
            },
        );
        self
    }

    /// Add a Whisper-compatible transcription provider
    pub fn with_whisper_stt(mut self, name: &str, base_url: &str) -> Self {
        self.config.stt.providers.insert(
            name.to_owned(),
            SttProviderConfig {
                provider_type: SttProviderType::Whisper,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.parse().expect("valid URL")),
                model: None,
                language: None,
            },
        );
        self
    }

    /// Use a Gemini chat model
    pub fn with_gemini_llm(mut self, base_url: &str) -> Self {
        self.config.llm = LlmConfig {
            provider_type: LlmProviderType::Google,
            api_key: Some(SecretString::from("test-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
            ..LlmConfig::default()
        };
        self
    }

    /// Use Gemini vision for OCR
    pub fn with_gemini_ocr(mut self, base_url: &str) -> Self {
        self.config.ocr = OcrConfig {
            provider_type: OcrProviderType::Google,
            api_key: Some(SecretString::from("test-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
            ..OcrConfig::default()
        };
        self
    }

    /// Use an `OpenAI`-compatible vision model for OCR
    pub fn with_openai_ocr(mut self, base_url: &str) -> Self {
        self.config.ocr = OcrConfig {
            provider_type: OcrProviderType::Openai,
            base_url: Some(base_url.parse().expect("valid URL")),
            ..OcrConfig::default()
        };
        self
    }

    /// Use a local Tesseract-compatible executable for OCR
    pub fn with_tesseract(mut self, command: &str) -> Self {
        self.config.ocr = OcrConfig {
            command: Some(command.to_owned()),
            ..OcrConfig::default()
        };
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Limit request bodies
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.config.server.body_limit_bytes = bytes;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

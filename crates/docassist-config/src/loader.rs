use std::path::Path;

use crate::Config;

/// Configuration used when no file is supplied
///
/// Every Gemini-backed collaborator reads the same key from the process
/// environment. An unset key expands to an empty string and surfaces as an
/// upstream authentication failure at call time, not at startup.
const BUILTIN_CONFIG: &str = r#"
[stt]
default_provider = "gemini"

[stt.providers.gemini]
type = "google"
api_key = "{{ env.GEMINI_API_KEY | default("") }}"

[llm]
type = "google"
model = "gemini-1.5-pro"
api_key = "{{ env.GEMINI_API_KEY | default("") }}"

[ocr]
type = "tesseract"
"#;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Built-in configuration: Gemini for transcription and chat, Tesseract for OCR
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded configuration fails to parse
    pub fn builtin() -> anyhow::Result<Self> {
        tracing::debug!("using built-in configuration");
        Self::parse(BUILTIN_CONFIG)
    }

    /// Expand, deserialize and validate raw TOML
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the default STT provider is unknown or a
    /// numeric limit is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref name) = self.stt.default_provider
            && !self.stt.providers.contains_key(name)
        {
            anyhow::bail!("stt.default_provider '{name}' is not a configured STT provider");
        }

        if self.server.body_limit_bytes == 0 {
            anyhow::bail!("server.body_limit_bytes must be greater than 0");
        }

        if !(0.0..=1.0).contains(&self.telemetry.sampling_rate) {
            anyhow::bail!("telemetry.sampling_rate must be between 0.0 and 1.0");
        }

        Ok(())
    }
}

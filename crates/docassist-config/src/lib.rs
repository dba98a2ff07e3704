#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod ocr;
pub mod server;
pub mod stt;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use llm::*;
pub use ocr::*;
pub use server::*;
pub use stt::*;
pub use telemetry::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};

/// Default Google Generative Language API base URL, shared by every
/// collaborator that talks to Gemini
pub const GOOGLE_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Top-level docassist configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Transcriber configuration
    #[serde(default)]
    pub stt: SttConfig,
    /// Chat responder and summarizer configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Text extractor configuration
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Logging and trace export configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

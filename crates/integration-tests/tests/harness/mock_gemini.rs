//! Mock Gemini backend for integration tests
//!
//! Serves `POST /v1beta/models/{model}:generateContent` and answers according
//! to what the request asks for: inline audio is transcribed, inline images
//! are read, the report prompt is summarized and anything else is chat.
//! With `echo_inline` set, answers are derived from the request so that
//! concurrent callers can tell their responses apart.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Kind of request, inferred from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Transcription,
    Chat,
    Ocr,
    Summary,
}

/// Canned answers and failure injection
#[derive(Debug, Clone)]
pub struct MockGeminiConfig {
    pub transcript: String,
    pub chat_reply: String,
    pub ocr_text: String,
    pub summary: String,
    /// Kind of request answered with a 500
    pub failing: Option<Kind>,
    /// Answer transcription and OCR with the decoded inline payload, and
    /// summaries with `summary of <report>`
    pub echo_inline: bool,
}

impl Default for MockGeminiConfig {
    fn default() -> Self {
        Self {
            transcript: "Patient reports headache.".to_owned(),
            chat_reply: "## Urgency Level\nlow".to_owned(),
            ocr_text: "Hemoglobin 13.5 g/dL".to_owned(),
            summary: "Normal hemoglobin.".to_owned(),
            failing: None,
            echo_inline: false,
        }
    }
}

/// Mock Gemini backend that returns predictable responses
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

struct MockGeminiState {
    config: MockGeminiConfig,
    transcription_count: AtomicU32,
    chat_count: AtomicU32,
    ocr_count: AtomicU32,
    summary_count: AtomicU32,
    chat_prompts: Mutex<Vec<String>>,
    models: Mutex<Vec<String>>,
    api_keys: Mutex<Vec<String>>,
}

impl MockGemini {
    /// Start the mock with default answers
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(MockGeminiConfig::default()).await
    }

    /// Start the mock with custom answers
    pub async fn start_with(config: MockGeminiConfig) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            config,
            transcription_count: AtomicU32::new(0),
            chat_count: AtomicU32::new(0),
            ocr_count: AtomicU32::new(0),
            summary_count: AtomicU32::new(0),
            chat_prompts: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
            api_keys: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1beta/models/{model_action}", routing::post(handle_generate_content))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Number of requests of `kind` received
    pub fn count(&self, kind: Kind) -> u32 {
        let counter = match kind {
            Kind::Transcription => &self.state.transcription_count,
            Kind::Chat => &self.state.chat_count,
            Kind::Ocr => &self.state.ocr_count,
            Kind::Summary => &self.state.summary_count,
        };
        counter.load(Ordering::Relaxed)
    }

    /// Total number of requests received
    pub fn total_count(&self) -> u32 {
        [Kind::Transcription, Kind::Chat, Kind::Ocr, Kind::Summary]
            .into_iter()
            .map(|kind| self.count(kind))
            .sum()
    }

    /// Prompts received by chat requests, in order
    pub fn chat_prompts(&self) -> Vec<String> {
        self.state.chat_prompts.lock().unwrap().clone()
    }

    /// Models named in request paths, in order
    pub fn models(&self) -> Vec<String> {
        self.state.models.lock().unwrap().clone()
    }

    /// API keys received in `x-goog-api-key`, in order
    pub fn api_keys(&self) -> Vec<String> {
        self.state.api_keys.lock().unwrap().clone()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

const SUMMARY_PREFIX: &str = "Summarize the following medical report:";

/// Classify a request; the second element is the inline payload (still
/// base64) or the joined text parts
fn classify(body: &Value) -> (Kind, String) {
    let parts = body["contents"][0]["parts"].as_array().cloned().unwrap_or_default();

    if let Some(inline) = parts.iter().map(|p| &p["inlineData"]).find(|d| d.is_object()) {
        let kind = if inline["mimeType"].as_str().is_some_and(|m| m.starts_with("image/")) {
            Kind::Ocr
        } else {
            Kind::Transcription
        };
        return (kind, inline["data"].as_str().unwrap_or_default().to_owned());
    }

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

    if text.starts_with(SUMMARY_PREFIX) {
        (Kind::Summary, text)
    } else {
        (Kind::Chat, text)
    }
}

fn candidate(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 8, "totalTokenCount": 20 },
        "modelVersion": "mock"
    })
}

async fn handle_generate_content(
    State(state): State<Arc<MockGeminiState>>,
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(model) = model_action.strip_suffix(":generateContent") else {
        return (StatusCode::NOT_FOUND, "unknown action").into_response();
    };
    state.models.lock().unwrap().push(model.to_owned());

    if let Some(key) = headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) {
        state.api_keys.lock().unwrap().push(key.to_owned());
    }

    let (kind, content) = classify(&body);
    let config = &state.config;

    let (counter, answer) = match kind {
        Kind::Transcription | Kind::Ocr if config.echo_inline => {
            let decoded = STANDARD.decode(&content).unwrap_or_default();
            let counter = if kind == Kind::Ocr {
                &state.ocr_count
            } else {
                &state.transcription_count
            };
            (counter, String::from_utf8_lossy(&decoded).into_owned())
        }
        Kind::Transcription => (&state.transcription_count, config.transcript.clone()),
        Kind::Ocr => (&state.ocr_count, config.ocr_text.clone()),
        Kind::Summary if config.echo_inline => {
            let report = content.strip_prefix(SUMMARY_PREFIX).unwrap_or(&content).trim();
            (&state.summary_count, format!("summary of {report}"))
        }
        Kind::Summary => (&state.summary_count, config.summary.clone()),
        Kind::Chat => {
            state.chat_prompts.lock().unwrap().push(content);
            (&state.chat_count, config.chat_reply.clone())
        }
    };
    counter.fetch_add(1, Ordering::Relaxed);

    if config.failing == Some(kind) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": { "code": 500, "message": "mock failure", "status": "INTERNAL" }
            })),
        )
            .into_response();
    }

    Json(candidate(&answer)).into_response()
}

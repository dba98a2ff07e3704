//! Mock `OpenAI`-compatible vision backend
//!
//! Answers `POST /v1/chat/completions` with the decoded contents of the
//! `data:` URL it was sent, so OCR results can be traced back to the upload.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Mock chat completions server for vision requests
pub struct MockVision {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockVisionState>,
}

#[derive(Default)]
struct MockVisionState {
    models: Mutex<Vec<String>>,
    media_types: Mutex<Vec<String>>,
}

impl MockVision {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockVisionState::default());

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_completion))
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

    /// Base URL including `/v1`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Models named in requests, in order
    pub fn models(&self) -> Vec<String> {
        self.state.models.lock().unwrap().clone()
    }

    /// Media types of the received `data:` URLs, in order
    pub fn media_types(&self) -> Vec<String> {
        self.state.media_types.lock().unwrap().clone()
    }
}

impl Drop for MockVision {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_completion(State(state): State<Arc<MockVisionState>>, Json(body): Json<Value>) -> Response {
    if let Some(model) = body["model"].as_str() {
        state.models.lock().unwrap().push(model.to_owned());
    }

    let parts = body["messages"][0]["content"].as_array().cloned().unwrap_or_default();
    let Some(url) = parts.iter().find_map(|p| p["image_url"]["url"].as_str()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "expected an image_url part" } })),
        )
            .into_response();
    };

    let Some((media_type, data)) = url.strip_prefix("data:").and_then(|rest| rest.split_once(";base64,")) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "expected a base64 data URL" } })),
        )
            .into_response();
    };
    state.media_types.lock().unwrap().push(media_type.to_owned());

    let text = String::from_utf8_lossy(&STANDARD.decode(data).unwrap_or_default()).into_owned();

    Json(json!({
        "id": "chatcmpl-mock",
        "model": body["model"],
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": format!("{text}\n") },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 30, "completion_tokens": 5 }
    }))
    .into_response()
}

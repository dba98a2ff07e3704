//! Mock `OpenAI`-compatible transcription backend

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// Mock Whisper server answering `POST /v1/audio/transcriptions`
pub struct MockWhisper {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockWhisperState>,
}

struct MockWhisperState {
    text: String,
    request_count: AtomicU32,
}

impl MockWhisper {
    /// Start the mock, answering every request with `text`
    pub async fn start(text: &str) -> anyhow::Result<Self> {
        let state = Arc::new(MockWhisperState {
            text: text.to_owned(),
            request_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
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

    /// Number of transcription requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockWhisper {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(State(state): State<Arc<MockWhisperState>>, mut multipart: Multipart) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let mut has_file = false;
    let mut model = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => has_file = !field.bytes().await.unwrap_or_default().is_empty(),
            Some("model") => model = field.text().await.ok(),
            _ => {}
        }
    }

    if !has_file || model.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "file and model are required" } })),
        )
            .into_response();
    }

    Json(json!({ "text": state.text })).into_response()
}

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use docassist_core::ExtractUploads;

pub use error::{Result, SttError};
pub use server::{Server, SttServerBuilder};
pub use types::{TranscribeReply, TranscriptionRequest, TranscriptionResponse, VoiceProcessReply};

/// Build the STT server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &docassist_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        SttServerBuilder::new(&config.stt)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize STT server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for STT
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/transcribe", post(transcribe))
        .route("/api/voice/process", post(voice_process))
}

/// Handle `POST /transcribe` (multipart field `file`)
async fn transcribe(State(server): State<Arc<Server>>, ExtractUploads(mut uploads): ExtractUploads) -> Response {
    let Some(upload) = uploads.take("file") else {
        return SttError::MissingUpload("Missing required 'file' field in multipart form".to_owned()).into_response();
    };

    tracing::debug!("STT transcription handler called for {}", upload.filename);

    match server.transcribe(TranscriptionRequest::from_upload(upload)).await {
        Ok(response) => Json(TranscribeReply {
            transcription: response.text,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Handle `POST /api/voice/process` (multipart field `audio`)
///
/// Used by the voice chat screen; the reply echoes the transcription.
async fn voice_process(State(server): State<Arc<Server>>, ExtractUploads(mut uploads): ExtractUploads) -> Response {
    let Some(upload) = uploads.take("audio") else {
        return SttError::MissingUpload("No audio file provided".to_owned()).into_response();
    };

    match server.transcribe(TranscriptionRequest::from_upload(upload)).await {
        Ok(response) => Json(VoiceProcessReply {
            reply: response.text.clone(),
            transcription: response.text,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

//! Text extraction from uploaded images
//!
//! Runs a local Tesseract executable or asks Gemini to read the image, and
//! exposes the `/extract-text` route.

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

pub use error::{OcrError, Result};
pub use server::{OcrServerBuilder, Server};
pub use types::{ExtractTextReply, OcrRequest};

/// Build the OCR server from configuration
pub fn build_server(config: &docassist_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        OcrServerBuilder::new(&config.ocr)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize OCR server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for text extraction
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/extract-text", post(extract_text))
}

/// Handle `POST /extract-text` (multipart field `image`)
async fn extract_text(State(server): State<Arc<Server>>, ExtractUploads(mut uploads): ExtractUploads) -> Response {
    let Some(upload) = uploads.take("image") else {
        return OcrError::MissingUpload("Missing required 'image' field in multipart form".to_owned()).into_response();
    };

    match server.extract_text(OcrRequest::from_upload(upload)).await {
        Ok(text) => Json(ExtractTextReply { text }).into_response(),
        Err(e) => e.into_response(),
    }
}

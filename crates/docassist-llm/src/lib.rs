//! Chat responder and summarizer for docassist
//!
//! Wraps a single generative-language provider (Google Gemini or an
//! `OpenAI`-compatible API) behind the [`Provider`] trait and exposes the
//! `/chatbot` and `/summarize` routes. The Gemini provider is also reused by
//! the transcription and OCR crates for multimodal calls.

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

mod error;
pub mod protocol;
pub mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::post,
};

pub use error::{LlmError, Result};
pub use provider::{GoogleProvider, OpenAiProvider, Provider};
pub use server::{LlmServerBuilder, Server, summary_prompt};
pub use types::{
    ChatbotReply, ChatbotRequest, CompletionRequest, CompletionResponse, ContentPart, SummarizeRequest,
    SummarizeResponse, Usage,
};

/// Build the chat/summarize server from configuration
pub fn build_server(config: &docassist_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        LlmServerBuilder::new(&config.llm)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize LLM server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for the chatbot and summarizer
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/chatbot", post(chatbot))
        .route("/summarize", post(summarize))
}

/// Handle `POST /chatbot`
async fn chatbot(
    State(server): State<Arc<Server>>,
    payload: std::result::Result<Json<ChatbotRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return LlmError::InvalidRequest(rejection.body_text()).into_response(),
    };

    tracing::debug!(chars = request.message.len(), "chatbot handler called");

    match server.reply(&request.message).await {
        Ok(reply) => Json(ChatbotReply { reply }).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Handle `POST /summarize`
async fn summarize(
    State(server): State<Arc<Server>>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return LlmError::InvalidRequest(rejection.body_text()).into_response(),
    };

    tracing::debug!(chars = request.text.len(), "summarize handler called");

    match server.summarize(&request.text).await {
        Ok(summary) => Json(SummarizeResponse { summary }).into_response(),
        Err(e) => e.into_response(),
    }
}

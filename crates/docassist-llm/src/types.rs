use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Provider-neutral completion request: one user turn made of parts
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    pub parts: Vec<ContentPart>,
}

impl CompletionRequest {
    /// Single text prompt
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![ContentPart::Text(prompt.into())],
        }
    }

    /// Binary payload followed by an instruction
    pub fn inline(mime_type: impl Into<String>, data: Bytes, instruction: impl Into<String>) -> Self {
        Self {
            parts: vec![
                ContentPart::Inline {
                    mime_type: mime_type.into(),
                    data,
                },
                ContentPart::Text(instruction.into()),
            ],
        }
    }
}

/// A single piece of user content
#[derive(Debug, Clone)]
pub enum ContentPart {
    Text(String),
    /// Raw bytes (audio or image) with their MIME type
    Inline { mime_type: String, data: Bytes },
}

/// Provider-neutral completion response
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text
    pub text: String,
    /// Model that produced the text
    pub model: String,
    /// Token accounting, when the provider reports it
    pub usage: Option<Usage>,
}

/// Token accounting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// `POST /chatbot` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotRequest {
    pub message: String,
}

/// `POST /chatbot` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotReply {
    pub reply: String,
}

/// `POST /summarize` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// `POST /summarize` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

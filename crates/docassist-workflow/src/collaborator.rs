//! Seams between the workflow and the capability servers

use async_trait::async_trait;
use docassist_core::Upload;

/// Error returned by a collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Speech-to-text collaborator
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Upload) -> Result<String, BoxError>;
}

/// Chat collaborator; the prompt is sent unchanged
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn reply(&self, prompt: &str) -> Result<String, BoxError>;
}

/// OCR collaborator
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, image: Upload) -> Result<String, BoxError>;
}

/// Medical report summarizer
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, BoxError>;
}

#[async_trait]
impl Transcriber for stt::Server {
    async fn transcribe(&self, audio: Upload) -> Result<String, BoxError> {
        let response = Self::transcribe(self, stt::TranscriptionRequest::from_upload(audio)).await?;
        Ok(response.text)
    }
}

#[async_trait]
impl ChatResponder for docassist_llm::Server {
    async fn reply(&self, prompt: &str) -> Result<String, BoxError> {
        Ok(Self::reply(self, prompt).await?)
    }
}

#[async_trait]
impl Summarizer for docassist_llm::Server {
    async fn summarize(&self, text: &str) -> Result<String, BoxError> {
        Ok(Self::summarize(self, text).await?)
    }
}

#[async_trait]
impl TextExtractor for ocr::Server {
    async fn extract_text(&self, image: Upload) -> Result<String, BoxError> {
        Ok(Self::extract_text(self, ocr::OcrRequest::from_upload(image)).await?)
    }
}

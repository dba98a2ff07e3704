use std::sync::Arc;

use docassist_core::Uploads;
use serde::{Deserialize, Serialize};

use crate::{
    collaborator::{ChatResponder, Summarizer, TextExtractor, Transcriber},
    error::WorkflowError,
    prompt::clinical_prompt,
};

/// Assembled output of one workflow run
///
/// `extracted_text` is present only when an image was selected, and
/// `summary` only when the extracted text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub transcription: String,
    pub chatbot_reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Consultation pipeline: transcribe, analyse, then optionally read and
/// summarize an attached report
pub struct Workflow {
    transcriber: Arc<dyn Transcriber>,
    chat: Arc<dyn ChatResponder>,
    extractor: Arc<dyn TextExtractor>,
    summarizer: Arc<dyn Summarizer>,
}

impl Workflow {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        chat: Arc<dyn ChatResponder>,
        extractor: Arc<dyn TextExtractor>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            transcriber,
            chat,
            extractor,
            summarizer,
        }
    }

    /// Run every stage for one request
    ///
    /// Stages run strictly in order. The first failure aborts the run and
    /// discards whatever was produced before it.
    pub async fn run(&self, mut uploads: Uploads) -> Result<WorkflowResult, WorkflowError> {
        let audio = uploads.take("file").ok_or(WorkflowError::MissingFile)?;
        if !audio.is_selected() {
            return Err(WorkflowError::NoFileSelected);
        }

        self.run_stages(audio, uploads.take("image")).await
    }

    async fn run_stages(
        &self,
        audio: docassist_core::Upload,
        image: Option<docassist_core::Upload>,
    ) -> Result<WorkflowResult, WorkflowError> {
        tracing::debug!(filename = %audio.filename, bytes = audio.data.len(), "workflow started");

        let transcription = self
            .transcriber
            .transcribe(audio)
            .await
            .map_err(WorkflowError::Transcription)?;

        let chatbot_reply = self
            .chat
            .reply(&clinical_prompt(&transcription))
            .await
            .map_err(WorkflowError::Chat)?;

        let mut result = WorkflowResult {
            transcription,
            chatbot_reply,
            extracted_text: None,
            summary: None,
        };

        if let Some(image) = image.filter(docassist_core::Upload::is_selected) {
            let extracted_text = self
                .extractor
                .extract_text(image)
                .await
                .map_err(WorkflowError::Extraction)?;

            if !extracted_text.is_empty() {
                let summary = self
                    .summarizer
                    .summarize(&extracted_text)
                    .await
                    .map_err(WorkflowError::Summarization)?;
                result.summary = Some(summary);
            }

            result.extracted_text = Some(extracted_text);
        }

        tracing::debug!(
            extracted = result.extracted_text.is_some(),
            summarized = result.summary.is_some(),
            "workflow complete"
        );

        Ok(result)
    }
}

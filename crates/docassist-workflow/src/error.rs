use axum::response::{IntoResponse, Response};
use docassist_core::HttpError;
use http::StatusCode;
use thiserror::Error;

use crate::collaborator::BoxError;

/// Full-workflow errors
///
/// Validation failures are client errors; every collaborator failure is a
/// server error carrying the collaborator's message.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Audio/video file is required")]
    MissingFile,

    #[error("No audio/video file selected")]
    NoFileSelected,

    #[error("Transcription failed: {0}")]
    Transcription(#[source] BoxError),

    #[error("Clinical analysis failed: {0}")]
    Chat(#[source] BoxError),

    #[error("Text extraction failed: {0}")]
    Extraction(#[source] BoxError),

    #[error("Summarization failed: {0}")]
    Summarization(#[source] BoxError),
}

impl HttpError for WorkflowError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::NoFileSelected => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingFile | Self::NoFileSelected => "invalid_request_error",
            _ => "workflow_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        docassist_core::error_response(&self)
    }
}

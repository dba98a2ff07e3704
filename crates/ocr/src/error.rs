use axum::response::{IntoResponse, Response};
use docassist_core::HttpError;
use docassist_llm::LlmError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OcrError>;

/// Text extraction errors
#[derive(Debug, Error)]
pub enum OcrError {
    /// Required multipart file field is absent
    #[error("{0}")]
    MissingUpload(String),

    /// The OCR executable could not be started
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The OCR executable exited unsuccessfully
    #[error("OCR engine failed: {0}")]
    ProcessFailed(String),

    /// Vision provider call failed
    #[error(transparent)]
    Provider(#[from] LlmError),

    /// I/O while talking to the OCR process
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpError for OcrError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUpload(_) => StatusCode::BAD_REQUEST,
            Self::EngineUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::ProcessFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Provider(inner) => inner.status_code(),
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingUpload(_) => "invalid_request_error",
            Self::EngineUnavailable(_) | Self::ProcessFailed(_) => "ocr_error",
            Self::Provider(inner) => inner.error_type(),
            Self::Io(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Provider(inner) => inner.client_message(),
            Self::Io(_) => "Internal server error".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for OcrError {
    fn into_response(self) -> Response {
        docassist_core::error_response(&self)
    }
}

use axum::response::{IntoResponse, Response};
use docassist_core::HttpError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while calling the language model
///
/// Failures are always returned as errors; a reply is never a disguised
/// error string.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Client sent a malformed or invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream rejected the API key (missing or invalid)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Upstream returned a non-success status
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Upstream answered without any usable text
    #[error("Provider returned no content: {0}")]
    EmptyResponse(String),

    /// Unexpected internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl LlmError {
    /// Classify a non-success upstream status
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            _ => Self::ProviderApiError { status, message },
        }
    }
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::ProviderApiError { status, .. } => match *status {
                400 => StatusCode::BAD_REQUEST,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::ConnectionError(_) | Self::EmptyResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::ProviderApiError { .. } | Self::ConnectionError(_) | Self::EmptyResponse(_) => "api_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for LlmError {
    fn into_response(self) -> Response {
        docassist_core::error_response(&self)
    }
}

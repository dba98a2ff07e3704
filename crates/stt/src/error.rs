use axum::response::{IntoResponse, Response};
use docassist_core::HttpError;
use docassist_llm::LlmError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SttError {
    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Required multipart file field is absent
    #[error("{0}")]
    MissingUpload(String),

    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// No provider available to serve the request
    #[error("STT provider '{0}' not found")]
    ProviderNotFound(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// `[stt]` declares no providers at all
    #[error("No STT providers configured")]
    NoProviders,

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    /// If Some(message), it came from a provider and can be shown
    /// If None, it's an internal error and should not leak details
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl From<LlmError> for SttError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::InvalidRequest(message) => Self::InvalidRequest(message),
            LlmError::AuthenticationFailed(message) => Self::AuthenticationFailed(message),
            LlmError::ProviderApiError { status, message } => Self::ProviderApiError { status, message },
            LlmError::ConnectionError(message) => Self::ConnectionError(message),
            LlmError::EmptyResponse(reason) => Self::InternalError(Some(format!("No transcript produced: {reason}"))),
            LlmError::Internal(_) => Self::InternalError(None),
        }
    }
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::MissingUpload(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::ProviderNotFound(_) => StatusCode::NOT_FOUND,
            Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApiError { status, .. } => match *status {
                400 => StatusCode::BAD_REQUEST,
                401 => StatusCode::UNAUTHORIZED,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::NoProviders | Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) | Self::MissingUpload(_) => "invalid_request_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::ProviderNotFound(_) => "not_found_error",
            Self::ConnectionError(_) | Self::ProviderApiError { .. } => "api_error",
            Self::NoProviders | Self::ConfigError(_) => "configuration_error",
            Self::InternalError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InternalError(Some(provider_msg)) => provider_msg.clone(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        docassist_core::error_response(&self)
    }
}

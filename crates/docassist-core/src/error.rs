use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each capability crate's error type. Handlers turn these
/// into `{"error": "..."}` bodies through [`error_response`].
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`), used in logs
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Flat error body returned by every route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// Render a domain error with its own status code
pub fn error_response<E: HttpError>(error: &E) -> Response {
    let status = error.status_code();

    if status.is_server_error() {
        tracing::error!(error_type = error.error_type(), %status, "{error}");
    } else {
        tracing::debug!(error_type = error.error_type(), %status, "{error}");
    }

    (status, Json(ErrorBody::new(error.client_message()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_flat() {
        let body = serde_json::to_value(ErrorBody::new("Audio/video file is required")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Audio/video file is required" }));
    }
}

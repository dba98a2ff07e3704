use std::collections::HashMap;

use axum::{
    Json,
    body::Body,
    extract::{FromRequest, Multipart},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::StatusCode;

use crate::ErrorBody;

/// One multipart file part, held in memory for the lifetime of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Client-supplied filename, possibly empty
    pub filename: String,
    /// Declared content type of the part
    pub content_type: Option<String>,
    /// Raw payload bytes
    pub data: Bytes,
}

impl Upload {
    /// Whether the client selected a file (non-empty filename)
    pub fn is_selected(&self) -> bool {
        !self.filename.is_empty()
    }
}

/// File parts of a multipart form keyed by field name
///
/// Parts without a `filename` attribute are plain form fields and are not
/// collected. When a field name repeats, the first part wins.
#[derive(Debug, Default)]
pub struct Uploads {
    files: HashMap<String, Upload>,
}

impl Uploads {
    /// Remove and return the file part named `field`
    pub fn take(&mut self, field: &str) -> Option<Upload> {
        self.files.remove(field)
    }

    /// Add a file part unless one with the same name is already present
    pub fn insert(&mut self, field: impl Into<String>, upload: Upload) {
        self.files.entry(field.into()).or_insert(upload);
    }
}

/// Extractor for multipart form data carrying file uploads
pub struct ExtractUploads(pub Uploads);

/// Rejection produced while reading a multipart body
#[derive(Debug)]
pub struct UploadRejection {
    status: StatusCode,
    message: String,
}

impl UploadRejection {
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for UploadRejection {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

/// Media types are case-insensitive, so `Multipart/Form-Data` is accepted too
fn is_form_data(content_type: &str) -> bool {
    content_type
        .get(..MULTIPART_FORM_DATA.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MULTIPART_FORM_DATA))
}

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

impl<S> FromRequest<S> for ExtractUploads
where
    S: Send + Sync,
{
    type Rejection = UploadRejection;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_form_data);

        if !is_multipart {
            return Err(UploadRejection {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: "Unsupported Content-Type, expected: 'Content-Type: multipart/form-data'".to_owned(),
            });
        }

        let mut multipart = Multipart::from_request(request, state).await.map_err(|e| UploadRejection {
            status: StatusCode::BAD_REQUEST,
            message: format!("Failed to parse multipart form: {e}"),
        })?;

        let mut uploads = Uploads::default();

        loop {
            let field = multipart.next_field().await.map_err(|e| UploadRejection {
                status: e.status(),
                message: format!("Failed to read multipart form: {}", e.body_text()),
            })?;

            let Some(field) = field else {
                break;
            };

            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            let Some(filename) = field.file_name().map(str::to_owned) else {
                tracing::trace!(field = %name, "skipping non-file form field");
                continue;
            };

            let content_type = field.content_type().map(str::to_owned);

            let data = field.bytes().await.map_err(|e| UploadRejection {
                status: e.status(),
                message: format!("Failed to read '{name}' data: {}", e.body_text()),
            })?;

            tracing::debug!(field = %name, %filename, bytes = data.len(), "received upload");

            uploads.insert(
                name,
                Upload {
                    filename,
                    content_type,
                    data,
                },
            );
        }

        Ok(Self(uploads))
    }
}

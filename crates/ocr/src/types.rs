use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Image handed to an OCR provider
#[derive(Debug, Clone)]
pub struct OcrRequest {
    /// Raw image data
    pub image: Bytes,
    /// Original filename
    pub filename: String,
    /// Image media type
    pub content_type: String,
}

impl OcrRequest {
    /// Build from an upload, inferring the media type from the filename when
    /// the client declared none or a generic one
    pub fn from_upload(upload: docassist_core::Upload) -> Self {
        let content_type = match upload.content_type.as_deref() {
            Some(declared) if declared.starts_with("image/") => declared.to_owned(),
            _ => image_type(&upload.filename).to_owned(),
        };

        Self {
            image: upload.data,
            filename: upload.filename,
            content_type,
        }
    }
}

/// `POST /extract-text` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractTextReply {
    pub text: String,
}

fn image_type(filename: &str) -> &'static str {
    let extension = filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        _ => "image/png",
    }
}

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Audio handed to a transcription provider, owned by one request
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Raw audio or video data
    pub audio: Bytes,
    /// Original filename
    pub filename: String,
    /// Content type of the media
    pub content_type: String,
}

impl TranscriptionRequest {
    /// Build from an upload, inferring the media type from the filename when
    /// the client declared none or a generic one
    pub fn from_upload(upload: docassist_core::Upload) -> Self {
        let content_type = media_type(&upload.filename, upload.content_type.as_deref()).to_owned();

        Self {
            audio: upload.data,
            filename: upload.filename,
            content_type,
        }
    }
}

/// Provider transcription result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}

/// `POST /transcribe` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeReply {
    pub transcription: String,
}

/// `POST /api/voice/process` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceProcessReply {
    pub transcription: String,
    /// Echo of the transcription
    pub reply: String,
}

/// Resolve the media type of an upload
fn media_type<'a>(filename: &str, declared: Option<&'a str>) -> &'a str {
    if let Some(declared) = declared
        && declared != "application/octet-stream"
        && !declared.is_empty()
    {
        return declared;
    }

    let extension = filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp3") => "audio/mp3",
        Some("m4a") => "audio/mp4",
        Some("ogg" | "oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("aac") => "audio/aac",
        Some("webm") => "audio/webm",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        _ => "audio/wav",
    }
}

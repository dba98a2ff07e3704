#![allow(dead_code)]

pub mod config;
pub mod mock_gemini;
pub mod mock_vision;
pub mod mock_whisper;
pub mod server;

/// Build a multipart form from `(field, filename, bytes)` parts
pub fn form(parts: &[(&str, &str, &'static [u8])]) -> reqwest::multipart::Form {
    parts.iter().fold(reqwest::multipart::Form::new(), |form, (field, filename, data)| {
        form.part(
            (*field).to_owned(),
            reqwest::multipart::Part::bytes(*data).file_name((*filename).to_owned()),
        )
    })
}

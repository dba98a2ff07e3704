//! Shared plumbing for the docassist capability crates
//!
//! Error-to-response mapping, the outbound HTTP client, and in-memory
//! multipart upload extraction.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod secret;
mod upload;

pub use error::{ErrorBody, HttpError, error_response};
pub use http_client::http_client;
pub use secret::non_empty_secret;
pub use upload::{ExtractUploads, Upload, UploadRejection, Uploads};

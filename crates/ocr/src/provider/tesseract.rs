use std::process::Stdio;

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

use crate::{error::OcrError, types::OcrRequest};

use super::OcrProvider;

const DEFAULT_COMMAND: &str = "tesseract";

/// Local Tesseract executable
///
/// Image bytes are piped through `tesseract stdin stdout`, so nothing is
/// staged on disk and concurrent requests never share a file.
pub(crate) struct TesseractProvider {
    command: String,
    language: Option<String>,
}

impl TesseractProvider {
    pub fn new(command: Option<String>, language: Option<String>) -> Self {
        Self {
            command: command.unwrap_or_else(|| DEFAULT_COMMAND.to_string()),
            language,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.command);
        command.arg("stdin").arg("stdout");

        if let Some(language) = &self.language {
            command.arg("-l").arg(language);
        }

        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        command
    }
}

#[async_trait]
impl OcrProvider for TesseractProvider {
    async fn extract(&self, request: OcrRequest) -> crate::error::Result<String> {
        tracing::debug!(
            "Tesseract OCR request: {} bytes, file={}",
            request.image.len(),
            request.filename
        );

        let mut child = self.command().spawn().map_err(|e| {
            tracing::error!(command = %self.command, "failed to start OCR engine: {e}");
            OcrError::EngineUnavailable(format!("failed to start '{}': {e}", self.command))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OcrError::EngineUnavailable("OCR engine stdin unavailable".to_owned()))?;

        let image = request.image;
        let write = async move {
            stdin.write_all(&image).await?;
            stdin.shutdown().await
        };

        let (written, output) = tokio::join!(write, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            tracing::error!(status = %output.status, "OCR engine failed: {stderr}");
            return Err(OcrError::ProcessFailed(if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            }));
        }

        written?;

        let text = String::from_utf8_lossy(&output.stdout).trim().to_owned();

        tracing::debug!(chars = text.len(), "Tesseract OCR complete");

        Ok(text)
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}

pub(crate) mod tesseract;
pub(crate) mod vision;

use async_trait::async_trait;

use crate::types::OcrRequest;

/// Trait for OCR provider implementations
#[async_trait]
pub(crate) trait OcrProvider: Send + Sync {
    /// Extract the text visible in an image
    async fn extract(&self, request: OcrRequest) -> crate::error::Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}

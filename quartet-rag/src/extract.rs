//! Text extraction from uploaded files.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{RagError, Result};

/// Extracts plain text from an uploaded file's raw bytes.
///
/// Implementations must concatenate page text in page order and treat
/// empty or whitespace-only output as a failure, so downstream callers
/// never index an unusable document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the file.
    async fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// A [`TextExtractor`] for PDF files backed by the `pdf-extract` crate.
///
/// Extraction is CPU-bound, so it runs on the blocking thread pool.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String> {
        let owned = bytes.to_vec();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&owned))
            .await
            .map_err(|e| RagError::ExtractionFailed(format!("extraction task failed: {e}")))?
            .map_err(|e| RagError::ExtractionFailed(format!("could not parse PDF: {e}")))?;

        if text.trim().is_empty() {
            return Err(RagError::ExtractionFailed(
                "no text content found (image-based or empty PDF)".into(),
            ));
        }

        debug!(chars = text.len(), "extracted PDF text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn garbage_bytes_fail_extraction() {
        let extractor = PdfTextExtractor::new();
        let err = extractor.extract(b"not a pdf at all").await.unwrap_err();
        assert!(matches!(err, RagError::ExtractionFailed(_)));
    }
}

//! Ingest/query orchestration for the document agent.
//!
//! The [`DocumentPipeline`] is the explicitly constructed session context:
//! it owns the [`SimilarityIndex`] and composes an [`EmbeddingProvider`]
//! and a [`TextExtractor`] into the two operations the document agent
//! needs. A new session starts with a freshly built (empty) pipeline; the
//! owning shell controls its lifetime.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::document::{Document, Retrieval};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::extract::TextExtractor;
use crate::index::SimilarityIndex;

/// The document ingest/query orchestrator.
///
/// Ingestion runs extract → embed → insert; queries run embed → search
/// with `k = 1`. Construct one via [`DocumentPipeline::builder()`].
pub struct DocumentPipeline {
    config: PipelineConfig,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    extractor: Arc<dyn TextExtractor>,
    index: SimilarityIndex,
}

impl DocumentPipeline {
    /// Create a new [`DocumentPipelineBuilder`].
    pub fn builder() -> DocumentPipelineBuilder {
        DocumentPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The number of documents indexed so far in this session.
    pub async fn document_count(&self) -> usize {
        self.index.len().await
    }

    /// Ingest an uploaded file: extract text, embed it, and index it.
    ///
    /// # Errors
    ///
    /// - [`RagError::ExtractionFailed`] if the file yields no usable
    ///   text; nothing is indexed.
    /// - [`RagError::EmbeddingFailed`] if the embedding collaborator
    ///   fails; nothing is indexed.
    pub async fn ingest(&self, bytes: &[u8]) -> Result<()> {
        let text = self.extractor.extract(bytes).await?;
        self.ingest_text(text).await
    }

    /// Ingest text that has already been extracted.
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`RagError::ExtractionFailed`], keeping the never-index-empty
    /// invariant regardless of the entry point.
    pub async fn ingest_text(&self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RagError::ExtractionFailed("document text is empty".into()));
        }

        let embedding = self.embedding_provider.embed(&text).await.map_err(|e| {
            error!(error = %e, "embedding failed during ingestion");
            e
        })?;

        self.index.insert(embedding, Document::new(text)).await?;

        let document_count = self.index.len().await;
        info!(document_count, "document indexed");
        Ok(())
    }

    /// Retrieve the stored document closest to the query text.
    ///
    /// The returned [`Retrieval`] carries the full text plus a preview
    /// truncated to the configured number of characters.
    ///
    /// # Errors
    ///
    /// - [`RagError::NoDocumentsIndexed`] if nothing has been ingested.
    /// - [`RagError::EmbeddingFailed`] if the query cannot be embedded.
    pub async fn query(&self, text: &str) -> Result<Retrieval> {
        if self.index.is_empty().await {
            return Err(RagError::NoDocumentsIndexed);
        }

        let embedding = self.embedding_provider.embed(text).await.map_err(|e| {
            error!(error = %e, "embedding failed during query");
            e
        })?;

        let mut hits = self.index.search(&embedding, 1).await?;
        // Non-empty was checked above and nothing is ever removed,
        // so search returned at least one hit.
        let (document, distance) = hits.remove(0);

        let preview = truncate_chars(&document.text, self.config.preview_chars);
        info!(distance, preview_len = preview.len(), "query completed");

        Ok(Retrieval { text: document.text, preview, distance })
    }
}

/// Truncate to at most `max_chars` characters on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Builder for constructing a [`DocumentPipeline`].
///
/// The embedding provider and extractor are required; the config
/// defaults to [`PipelineConfig::default()`].
#[derive(Default)]
pub struct DocumentPipelineBuilder {
    config: Option<PipelineConfig>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    extractor: Option<Arc<dyn TextExtractor>>,
}

impl DocumentPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the text extractor.
    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Build the [`DocumentPipeline`], validating that the configured
    /// dimension matches what the provider reports.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if a required field is missing
    /// or the dimensions disagree.
    pub fn build(self) -> Result<DocumentPipeline> {
        let config = self.config.unwrap_or_default();
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| RagError::ConfigError("embedding_provider is required".into()))?;
        let extractor =
            self.extractor.ok_or_else(|| RagError::ConfigError("extractor is required".into()))?;

        if embedding_provider.dimensions() != config.dimension {
            return Err(RagError::ConfigError(format!(
                "provider emits {} dimensions but the pipeline is configured for {}",
                embedding_provider.dimensions(),
                config.dimension
            )));
        }

        let index = SimilarityIndex::new(config.dimension);
        Ok(DocumentPipeline { config, embedding_provider, extractor, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Deterministic stub: embeds text as simple character statistics.
    struct StubProvider {
        dimensions: usize,
    }

    #[async_trait]
    impl EmbeddingProvider for StubProvider {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            let mut v = vec![0.0f32; self.dimensions];
            for (i, ch) in text.chars().enumerate() {
                v[i % self.dimensions] += (ch as u32 % 64) as f32 / 64.0;
            }
            Ok(v)
        }

        fn dimensions(&self) -> usize {
            self.dimensions
        }
    }

    /// Passes bytes through as UTF-8 text.
    struct StubExtractor;

    #[async_trait]
    impl TextExtractor for StubExtractor {
        async fn extract(&self, bytes: &[u8]) -> Result<String> {
            let text = String::from_utf8_lossy(bytes).into_owned();
            if text.trim().is_empty() {
                return Err(RagError::ExtractionFailed("no text".into()));
            }
            Ok(text)
        }
    }

    fn pipeline(dimension: usize, preview_chars: usize) -> DocumentPipeline {
        DocumentPipeline::builder()
            .config(
                PipelineConfig::builder()
                    .dimension(dimension)
                    .preview_chars(preview_chars)
                    .build()
                    .unwrap(),
            )
            .embedding_provider(Arc::new(StubProvider { dimensions: dimension }))
            .extractor(Arc::new(StubExtractor))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn query_before_ingest_warns_no_documents() {
        let p = pipeline(8, 500);
        assert!(matches!(p.query("anything").await, Err(RagError::NoDocumentsIndexed)));
    }

    #[tokio::test]
    async fn whitespace_upload_is_rejected_without_side_effects() {
        let p = pipeline(8, 500);
        let err = p.ingest(b"   \n\t ").await.unwrap_err();
        assert!(matches!(err, RagError::ExtractionFailed(_)));
        assert!(err.is_user_correctable());
        assert_eq!(p.document_count().await, 0);
    }

    #[tokio::test]
    async fn round_trip_returns_the_same_document_closest() {
        let p = pipeline(8, 500);
        p.ingest_text("apple pie recipe").await.unwrap();
        p.ingest_text("rocket engine design").await.unwrap();

        let hit = p.query("apple pie recipe").await.unwrap();
        assert_eq!(hit.text, "apple pie recipe");
        assert!(hit.distance.abs() < 1e-6);
    }

    #[tokio::test]
    async fn preview_is_truncated_on_char_boundaries() {
        let p = pipeline(8, 5);
        p.ingest_text("héllo wörld, this runs long").await.unwrap();

        let hit = p.query("héllo wörld, this runs long").await.unwrap();
        assert_eq!(hit.preview.chars().count(), 5);
        assert_eq!(hit.preview, "héllo");
        assert!(hit.text.len() > hit.preview.len());
    }

    #[tokio::test]
    async fn mismatched_provider_dimension_fails_build() {
        let result = DocumentPipeline::builder()
            .config(PipelineConfig::builder().dimension(16).build().unwrap())
            .embedding_provider(Arc::new(StubProvider { dimensions: 8 }))
            .extractor(Arc::new(StubExtractor))
            .build();
        assert!(matches!(result, Err(RagError::ConfigError(_))));
    }
}

//! Document agent: ingest uploads, answer queries by similarity.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use quartet_core::{Agent, AgentInput, AgentOutput, QuartetError, Result};
use quartet_rag::DocumentPipeline;

/// PDF ingestion and nearest-neighbor retrieval over a
/// [`DocumentPipeline`].
///
/// File input is ingested; text input is treated as a query. The
/// user-correctable conditions (unreadable upload, query before any
/// ingestion) come back as warnings rather than errors, so the shell
/// shows them the way the demo UI did.
pub struct DocumentAgent {
    pipeline: Arc<DocumentPipeline>,
}

impl DocumentAgent {
    /// Create a document agent over the given pipeline.
    pub fn new(pipeline: Arc<DocumentPipeline>) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Agent for DocumentAgent {
    fn name(&self) -> &str {
        "document"
    }

    async fn handle(&self, input: AgentInput) -> Result<AgentOutput> {
        match input {
            AgentInput::File { name, bytes } => match self.pipeline.ingest(&bytes).await {
                Ok(()) => {
                    info!(file = %name, "document indexed");
                    Ok(AgentOutput::success(format!("Document '{name}' indexed.")))
                }
                Err(e) if e.is_user_correctable() => {
                    warn!(file = %name, error = %e, "upload rejected");
                    Ok(AgentOutput::warning(format!("Could not index '{name}': {e}")))
                }
                Err(e) => Err(QuartetError::Agent(e.to_string())),
            },
            AgentInput::Text(query) => match self.pipeline.query(&query).await {
                Ok(hit) => Ok(AgentOutput::info(format!(
                    "Relevant document snippet (distance {:.4}):\n{}",
                    hit.distance, hit.preview
                ))),
                Err(e) if e.is_user_correctable() => {
                    warn!(error = %e, "query rejected");
                    Ok(AgentOutput::warning("No documents indexed."))
                }
                Err(e) => Err(QuartetError::Agent(e.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_core::Severity;
    use quartet_rag::{EmbeddingProvider, PipelineConfig, RagError, TextExtractor};

    struct LenEmbedder;

    #[async_trait]
    impl EmbeddingProvider for LenEmbedder {
        async fn embed(&self, text: &str) -> quartet_rag::Result<Vec<f32>> {
            Ok(vec![text.len() as f32, text.chars().filter(|c| *c == ' ').count() as f32])
        }

        fn dimensions(&self) -> usize {
            2
        }
    }

    struct Utf8Extractor;

    #[async_trait]
    impl TextExtractor for Utf8Extractor {
        async fn extract(&self, bytes: &[u8]) -> quartet_rag::Result<String> {
            let text = String::from_utf8_lossy(bytes).into_owned();
            if text.trim().is_empty() {
                return Err(RagError::ExtractionFailed("no text".into()));
            }
            Ok(text)
        }
    }

    fn agent() -> DocumentAgent {
        let pipeline = DocumentPipeline::builder()
            .config(PipelineConfig::builder().dimension(2).build().unwrap())
            .embedding_provider(Arc::new(LenEmbedder))
            .extractor(Arc::new(Utf8Extractor))
            .build()
            .unwrap();
        DocumentAgent::new(Arc::new(pipeline))
    }

    #[tokio::test]
    async fn query_before_upload_warns() {
        let agent = agent();
        let out = agent.handle(AgentInput::text("anything")).await.unwrap();
        assert_eq!(out.severity, Severity::Warning);
        assert_eq!(out.text, "No documents indexed.");
    }

    #[tokio::test]
    async fn upload_then_query_returns_a_snippet() {
        let agent = agent();
        let upload =
            AgentInput::File { name: "notes.pdf".into(), bytes: b"quarterly report".to_vec() };
        let out = agent.handle(upload).await.unwrap();
        assert_eq!(out.severity, Severity::Success);

        let out = agent.handle(AgentInput::text("quarterly report")).await.unwrap();
        assert_eq!(out.severity, Severity::Info);
        assert!(out.text.contains("quarterly report"));
    }

    #[tokio::test]
    async fn empty_upload_warns_instead_of_failing() {
        let agent = agent();
        let upload = AgentInput::File { name: "blank.pdf".into(), bytes: b"   ".to_vec() };
        let out = agent.handle(upload).await.unwrap();
        assert_eq!(out.severity, Severity::Warning);
        assert!(out.text.contains("blank.pdf"));
    }
}

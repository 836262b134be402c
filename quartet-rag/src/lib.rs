//! Document indexing and similarity retrieval.
//!
//! This crate is the data path of the document agent: extracted text is
//! embedded into a fixed-dimension vector, stored in a [`SimilarityIndex`]
//! alongside its source text, and retrieved by brute-force nearest-neighbor
//! search. The [`DocumentPipeline`] ties extraction, embedding, and the
//! index into an ingest/query workflow.
//!
//! # Example
//!
//! ```rust,ignore
//! use quartet_rag::{DocumentPipeline, PipelineConfig, PdfTextExtractor};
//!
//! let pipeline = DocumentPipeline::builder()
//!     .config(PipelineConfig::default())
//!     .embedding_provider(Arc::new(provider))
//!     .extractor(Arc::new(PdfTextExtractor::new()))
//!     .build()?;
//!
//! pipeline.ingest(&pdf_bytes).await?;
//! let hit = pipeline.query("what does the report conclude?").await?;
//! println!("{}", hit.preview);
//! ```

pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod hosted;
pub mod index;
pub mod pipeline;

pub use config::PipelineConfig;
pub use document::{Document, Retrieval};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use extract::{PdfTextExtractor, TextExtractor};
pub use hosted::HostedEmbeddingProvider;
pub use index::SimilarityIndex;
pub use pipeline::{DocumentPipeline, DocumentPipelineBuilder};

//! Error types for the `quartet-rag` crate.

use thiserror::Error;

/// Errors that can occur in the ingest/query data path.
#[derive(Debug, Error)]
pub enum RagError {
    /// A vector's length does not match the configured dimension.
    ///
    /// Unreachable when the embedding provider is configured correctly,
    /// but checked on every insert and search.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension the index was configured with.
        expected: usize,
        /// The length of the offending vector.
        actual: usize,
    },

    /// A search was attempted against an index with no entries.
    #[error("Index is empty")]
    EmptyIndex,

    /// A search was requested with `k == 0`.
    #[error("top_k must be greater than zero")]
    InvalidTopK,

    /// A query was issued before any document was ingested.
    #[error("No documents indexed")]
    NoDocumentsIndexed,

    /// An uploaded file yielded no usable text.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// The embedding collaborator failed.
    #[error("Embedding error ({provider}): {message}")]
    EmbeddingFailed {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RagError {
    /// Whether the error is a user-correctable condition (bad upload,
    /// query before ingestion) as opposed to a collaborator or
    /// programming failure. User-correctable errors surface as warnings.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            RagError::ExtractionFailed(_)
                | RagError::NoDocumentsIndexed
                | RagError::EmptyIndex
        )
    }
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RagError>;

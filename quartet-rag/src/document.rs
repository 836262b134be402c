//! Data types for stored documents and retrieval results.

use serde::{Deserialize, Serialize};

/// A source document: the concatenated text extracted from one upload.
///
/// Documents are immutable once created and are never removed from the
/// index for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// The full extracted text.
    pub text: String,
}

impl Document {
    /// Create a document from extracted text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A retrieved [`Document`] paired with its distance to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieval {
    /// The full stored text of the best match.
    pub text: String,
    /// A display snippet truncated to the configured preview length.
    pub preview: String,
    /// Squared L2 distance to the query vector (lower is closer).
    pub distance: f32,
}

//! In-memory similarity index over parallel vector and document stores.
//!
//! This module provides [`SimilarityIndex`], an exact brute-force
//! nearest-neighbor store protected by a `tokio::sync::RwLock`. It is
//! sized for a single interactive session; an approximate structure could
//! be substituted behind the same `insert`/`search` contract if the data
//! volume ever warranted it.

use tokio::sync::RwLock;

use crate::document::Document;
use crate::error::{RagError, Result};

/// The paired stores. Kept in one struct behind one lock so an insert
/// can never be observed with a vector but not its document.
#[derive(Debug, Default)]
struct Entries {
    vectors: Vec<Vec<f32>>,
    documents: Vec<Document>,
}

/// An in-memory vector index using squared L2 distance for search.
///
/// Index position `i` of the vector store corresponds to position `i`
/// of the document store; both grow together and nothing is ever
/// removed. All operations are async-safe via `tokio::sync::RwLock`:
/// `insert` holds the write lock and `search` the read lock for their
/// full duration.
///
/// # Example
///
/// ```rust,ignore
/// use quartet_rag::{SimilarityIndex, Document};
///
/// let index = SimilarityIndex::new(384);
/// index.insert(embedding, Document::new(text)).await?;
/// let hits = index.search(&query_embedding, 1).await?;
/// ```
#[derive(Debug)]
pub struct SimilarityIndex {
    dimension: usize,
    entries: RwLock<Entries>,
}

/// Compute squared L2 distance between two vectors of equal length.
///
/// The square root is omitted; it is monotonic, so ranking is identical
/// to true Euclidean distance.
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl SimilarityIndex {
    /// Create a new empty index for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension, entries: RwLock::new(Entries::default()) }
    }

    /// The configured vector dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.documents.len()
    }

    /// Whether the index holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append a vector and its document as one atomic pair.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::DimensionMismatch`] if the vector length does
    /// not match the configured dimension; the stores are unchanged.
    pub async fn insert(&self, vector: Vec<f32>, document: Document) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(RagError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }

        let mut entries = self.entries.write().await;
        entries.vectors.push(vector);
        entries.documents.push(document);
        Ok(())
    }

    /// Return the `k` stored documents closest to `query`, ordered by
    /// ascending squared L2 distance. Equal distances keep insertion
    /// order. If `k` exceeds the store size, all entries are returned.
    ///
    /// # Errors
    ///
    /// - [`RagError::InvalidTopK`] if `k == 0`.
    /// - [`RagError::DimensionMismatch`] if the query length is wrong.
    /// - [`RagError::EmptyIndex`] if nothing has been inserted.
    pub async fn search(&self, query: &[f32], k: usize) -> Result<Vec<(Document, f32)>> {
        if k == 0 {
            return Err(RagError::InvalidTopK);
        }
        if query.len() != self.dimension {
            return Err(RagError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let entries = self.entries.read().await;
        if entries.documents.is_empty() {
            return Err(RagError::EmptyIndex);
        }

        let mut scored: Vec<(Document, f32)> = entries
            .vectors
            .iter()
            .zip(entries.documents.iter())
            .map(|(vector, document)| (document.clone(), squared_l2(vector, query)))
            .collect();

        // sort_by is stable, so ties keep insertion order.
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::new(text)
    }

    #[tokio::test]
    async fn insert_and_search_returns_closest_first() {
        let index = SimilarityIndex::new(2);
        index.insert(vec![0.0, 0.0], doc("origin")).await.unwrap();
        index.insert(vec![3.0, 4.0], doc("far")).await.unwrap();

        let hits = index.search(&[0.1, 0.1], 2).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0.text, "origin");
        assert_eq!(hits[1].0.text, "far");
        assert!(hits[0].1 <= hits[1].1);
        assert!(hits[0].1 >= 0.0);
    }

    #[tokio::test]
    async fn dimension_mismatch_leaves_index_unchanged() {
        let index = SimilarityIndex::new(3);
        let err = index.insert(vec![1.0, 2.0], doc("short")).await.unwrap_err();
        assert!(matches!(err, RagError::DimensionMismatch { expected: 3, actual: 2 }));
        assert_eq!(index.len().await, 0);

        index.insert(vec![1.0, 2.0, 3.0], doc("ok")).await.unwrap();
        let err = index.search(&[1.0], 1).await.unwrap_err();
        assert!(matches!(err, RagError::DimensionMismatch { expected: 3, actual: 1 }));
        assert_eq!(index.len().await, 1);
    }

    #[tokio::test]
    async fn empty_index_search_fails() {
        let index = SimilarityIndex::new(2);
        assert!(matches!(index.search(&[0.0, 0.0], 1).await, Err(RagError::EmptyIndex)));
    }

    #[tokio::test]
    async fn zero_k_is_rejected() {
        let index = SimilarityIndex::new(2);
        index.insert(vec![0.0, 0.0], doc("a")).await.unwrap();
        assert!(matches!(index.search(&[0.0, 0.0], 0).await, Err(RagError::InvalidTopK)));
    }

    #[tokio::test]
    async fn k_larger_than_store_returns_everything() {
        let index = SimilarityIndex::new(1);
        index.insert(vec![1.0], doc("a")).await.unwrap();
        index.insert(vec![2.0], doc("b")).await.unwrap();

        let hits = index.search(&[0.0], 10).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0.text, "a");
    }

    #[tokio::test]
    async fn ties_keep_insertion_order() {
        let index = SimilarityIndex::new(2);
        index.insert(vec![1.0, 0.0], doc("first")).await.unwrap();
        index.insert(vec![1.0, 0.0], doc("second")).await.unwrap();

        let hits = index.search(&[0.0, 0.0], 2).await.unwrap();
        assert_eq!(hits[0].0.text, "first");
        assert_eq!(hits[1].0.text, "second");
    }
}

//! Property tests for similarity index search ordering and atomicity.

use std::collections::HashSet;

use proptest::prelude::*;
use quartet_rag::document::Document;
use quartet_rag::error::RagError;
use quartet_rag::index::SimilarityIndex;

const DIM: usize = 16;

/// Generate an arbitrary embedding of the fixed test dimension.
fn arb_embedding() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, DIM)
}

/// Generate an embedding paired with a short document text.
fn arb_entry() -> impl Strategy<Value = (Vec<f32>, String)> {
    (arb_embedding(), "[a-z ]{5,30}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any set of inserted entries and any k >= 1, search returns
    /// min(k, n) results, every result is an inserted document, and
    /// distances are non-negative and ascending.
    #[test]
    fn search_is_ascending_and_bounded(
        entries in proptest::collection::vec(arb_entry(), 1..20),
        query in arb_embedding(),
        k in 1usize..25,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (hits, inserted) = rt.block_on(async {
            let index = SimilarityIndex::new(DIM);
            let mut inserted = HashSet::new();
            for (i, (vector, text)) in entries.iter().enumerate() {
                // Suffix keeps texts unique so membership checks are exact.
                let text = format!("{text} #{i}");
                inserted.insert(text.clone());
                index.insert(vector.clone(), Document::new(text)).await.unwrap();
            }
            let hits = index.search(&query, k).await.unwrap();
            (hits, inserted)
        });

        prop_assert_eq!(hits.len(), k.min(entries.len()));

        for (document, distance) in &hits {
            prop_assert!(inserted.contains(&document.text));
            prop_assert!(*distance >= 0.0);
        }
        for window in hits.windows(2) {
            prop_assert!(
                window[0].1 <= window[1].1,
                "distances not ascending: {} > {}",
                window[0].1,
                window[1].1,
            );
        }
    }

    /// Rejected inserts leave the paired stores untouched: the index
    /// length always equals the number of accepted inserts.
    #[test]
    fn rejected_inserts_have_no_side_effects(
        entries in proptest::collection::vec(arb_entry(), 0..10),
        bad_lengths in proptest::collection::vec(0usize..DIM, 0..5),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (len, accepted) = rt.block_on(async {
            let index = SimilarityIndex::new(DIM);
            let mut accepted = 0usize;
            for (vector, text) in &entries {
                index.insert(vector.clone(), Document::new(text.clone())).await.unwrap();
                accepted += 1;
            }
            for bad_len in &bad_lengths {
                let err = index
                    .insert(vec![0.0; *bad_len], Document::new("rejected"))
                    .await
                    .unwrap_err();
                assert!(matches!(err, RagError::DimensionMismatch { .. }));
            }
            (index.len().await, accepted)
        });

        prop_assert_eq!(len, accepted);
    }

    /// Searching with k greater than the store size returns exactly all
    /// stored entries.
    #[test]
    fn oversized_k_returns_everything(
        entries in proptest::collection::vec(arb_entry(), 1..10),
        query in arb_embedding(),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let hits = rt.block_on(async {
            let index = SimilarityIndex::new(DIM);
            for (vector, text) in &entries {
                index.insert(vector.clone(), Document::new(text.clone())).await.unwrap();
            }
            index.search(&query, entries.len() + 100).await.unwrap()
        });

        prop_assert_eq!(hits.len(), entries.len());
    }
}

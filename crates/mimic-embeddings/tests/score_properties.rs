//! Score-encoding properties: dot(query, embed(text)) == 2 * score - 1.

use mimic_embeddings::{dot, DotProductEmbeddings, Embeddings, ScoredDocument, SeededSource};

fn seeded_store(dim: usize, seed: u64) -> DotProductEmbeddings {
    DotProductEmbeddings::with_source(dim, Box::new(SeededSource::new(seed)))
        .expect("seeded store construction should succeed")
}

#[tokio::test]
async fn boundary_scores_hit_the_dot_product_extremes() {
    let store = seeded_store(8, 21);
    store
        .register_documents([
            ScoredDocument::new("opposite", 0.0),
            ScoredDocument::new("unrelated", 0.5),
            ScoredDocument::new("identical", 1.0),
        ])
        .await
        .unwrap();

    let vectors = store
        .embed_documents(&["opposite", "unrelated", "identical"])
        .await
        .unwrap();
    let query = store.query_vector();

    let expectations = [(-1.0, 0), (0.0, 1), (1.0, 2)];
    for (target, i) in expectations {
        let product = dot(query, &vectors[i]).unwrap();
        assert!(
            (product - target).abs() < 1e-4,
            "score boundary should map to dot product {target}, got {product}"
        );
    }
}

#[tokio::test]
async fn end_to_end_three_documents() {
    // The canonical scenario: three scored documents in a 3-dimensional
    // store, embedded in one batch.
    let store = seeded_store(3, 22);
    store
        .register_documents([
            ScoredDocument::new("a", 0.8),
            ScoredDocument::new("b", 0.67),
            ScoredDocument::new("c", 0.09),
        ])
        .await
        .unwrap();

    let vectors = store.embed_documents(&["a", "b", "c"]).await.unwrap();
    let query = store.query_vector();

    for (i, score) in [0.8f32, 0.67, 0.09].iter().enumerate() {
        let product = dot(query, &vectors[i]).unwrap();
        let target = 2.0 * score - 1.0;
        assert!(
            (product - target).abs() < 1e-4,
            "document {i}: expected dot {target}, got {product}"
        );
    }

    let again = store.embed_documents(&["a"]).await.unwrap();
    assert_eq!(again[0], vectors[0], "re-embedding 'a' must be bit-identical");

    let unknown = store.embed_documents(&["unknown"]).await.unwrap();
    assert_eq!(unknown[0], vec![0.0; 3]);
}

#[tokio::test]
async fn scores_survive_separate_batches() {
    // Basis accumulation across calls must not disturb the score encoding of
    // later documents.
    let store = seeded_store(12, 23);
    store
        .register_documents([
            ScoredDocument::new("first", 0.31),
            ScoredDocument::new("second", 0.72),
            ScoredDocument::new("third", 0.55),
        ])
        .await
        .unwrap();

    store.embed_documents(&["first"]).await.unwrap();
    store.embed_documents(&["second"]).await.unwrap();
    let vectors = store
        .embed_documents(&["first", "second", "third"])
        .await
        .unwrap();

    let query = store.query_vector();
    for (i, score) in [0.31f32, 0.72, 0.55].iter().enumerate() {
        let product = dot(query, &vectors[i]).unwrap();
        let target = 2.0 * score - 1.0;
        assert!(
            (product - target).abs() < 1e-4,
            "document {i}: expected dot {target}, got {product}"
        );
    }
}

#[tokio::test]
async fn entropy_backed_store_encodes_scores_too() {
    // Same property under the default OS entropy source.
    let store = DotProductEmbeddings::new(32).unwrap();
    store
        .register_documents([ScoredDocument::new("entropy", 0.42)])
        .await
        .unwrap();

    let vectors = store.embed_documents(&["entropy"]).await.unwrap();
    let product = dot(store.query_vector(), &vectors[0]).unwrap();
    assert!(
        (product - (2.0 * 0.42 - 1.0)).abs() < 1e-4,
        "got {product}"
    );
}

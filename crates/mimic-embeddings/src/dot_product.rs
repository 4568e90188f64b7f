//! Mock embedder that encodes registered similarity scores as dot products.
//!
//! [`DotProductEmbeddings`] owns a fixed query vector and hands every
//! registered text a vector `v` with `dot(query, v) = 2 * score - 1`. Each
//! document vector is drawn orthogonal to everything generated before it
//! (query vector included), so the scored relationship to the query is the
//! only structure the vectors carry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mimic_core::{Embeddings, MimicError, ScoredDocument};
use tokio::sync::Mutex;

use crate::random::{normalized_vector, EntropySource, RandomSource};
use crate::solver::{dot_product_norm, solve, NormFn};

const DEFAULT_SOLVE_ATTEMPTS: usize = 8;
const MAX_QUERY_REROLLS: usize = 8;

/// Mutable store state. Kept behind one mutex so the check-then-insert on
/// the vector cache is atomic across a whole batch.
struct Inner {
    source: Box<dyn RandomSource>,
    docs: HashMap<String, ScoredDocument>,
    vectors: HashMap<String, Vec<f32>>,
    /// Generated vectors in generation order. Orthogonalizing against an
    /// append-only sequence keeps seeded runs reproducible; map iteration
    /// order would not.
    generated: Vec<Vec<f32>>,
}

/// Embeddings backed by synthetic score-encoding vectors.
///
/// Construction fixes the dimension and generates the query vector once;
/// [`embed_query`](Embeddings::embed_query) returns it verbatim for any
/// input. Texts registered via [`register_documents`](Self::register_documents)
/// embed to cached, stable vectors; unregistered texts embed to the zero
/// vector, signalling "no mock data" without failing the batch.
pub struct DotProductEmbeddings {
    query_vector: Vec<f32>,
    norm_fn: Arc<NormFn>,
    max_solve_attempts: usize,
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for DotProductEmbeddings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DotProductEmbeddings")
            .field("dim", &self.query_vector.len())
            .field("max_solve_attempts", &self.max_solve_attempts)
            .finish_non_exhaustive()
    }
}

impl DotProductEmbeddings {
    /// Create a store of the given dimension using OS entropy.
    pub fn new(dim: usize) -> Result<Self, MimicError> {
        Self::with_source(dim, Box::new(EntropySource))
    }

    /// Create a store of the given dimension using a caller-supplied random
    /// source (e.g. [`SeededSource`](crate::SeededSource) for reproducible
    /// tests).
    pub fn with_source(dim: usize, mut source: Box<dyn RandomSource>) -> Result<Self, MimicError> {
        if dim == 0 {
            return Err(MimicError::DimensionMismatch(
                "dimension must be at least 1".to_string(),
            ));
        }

        let query_vector = roll_query_vector(source.as_mut(), dim)?;
        tracing::debug!("DotProductEmbeddings: created store with dimension {dim}");

        Ok(Self {
            query_vector,
            norm_fn: Arc::new(dot_product_norm),
            max_solve_attempts: DEFAULT_SOLVE_ATTEMPTS,
            inner: Mutex::new(Inner {
                source,
                docs: HashMap::new(),
                vectors: HashMap::new(),
                generated: Vec::new(),
            }),
        })
    }

    /// Replace the default norm function. The function receives
    /// `(score, query_vector, orthogonal_candidate)` and returns the
    /// adjusted vector; the solver still enforces linear independence from
    /// the query vector on whatever it returns.
    pub fn with_norm_fn(
        mut self,
        norm_fn: impl Fn(f32, &[f32], Vec<f32>) -> Vec<f32> + Send + Sync + 'static,
    ) -> Self {
        self.norm_fn = Arc::new(norm_fn);
        self
    }

    /// Cap the score solver's redraw attempts (default: 8).
    pub fn with_max_solve_attempts(mut self, attempts: usize) -> Self {
        self.max_solve_attempts = attempts;
        self
    }

    /// The fixed query vector all document scores are encoded against.
    pub fn query_vector(&self) -> &[f32] {
        &self.query_vector
    }

    /// The dimension every produced vector has.
    pub fn dimension(&self) -> usize {
        self.query_vector.len()
    }

    /// Register documents and the similarity scores their embeddings must
    /// encode. Re-registering a text overwrites its score (last write wins);
    /// scores must lie in `[0, 1]`.
    pub async fn register_documents(
        &self,
        docs: impl IntoIterator<Item = ScoredDocument>,
    ) -> Result<(), MimicError> {
        let docs: Vec<ScoredDocument> = docs.into_iter().collect();
        for doc in &docs {
            if doc.score.is_nan() || !(0.0..=1.0).contains(&doc.score) {
                return Err(MimicError::Validation(format!(
                    "score {} for {:?} is outside [0, 1]",
                    doc.score, doc.content
                )));
            }
        }

        let mut inner = self.inner.lock().await;
        for doc in docs {
            inner.docs.insert(doc.content.clone(), doc);
        }

        Ok(())
    }

    /// All vectors generated so far plus the query vector, in generation
    /// order. Every new candidate is orthogonalized against this whole set
    /// so it stays jointly independent of the query.
    fn basis(&self, inner: &Inner) -> Vec<Vec<f32>> {
        let mut basis = inner.generated.clone();
        basis.push(self.query_vector.clone());
        basis
    }
}

#[async_trait]
impl Embeddings for DotProductEmbeddings {
    /// Embed texts in input order, growing the vector cache incrementally so
    /// each text is orthogonalized against everything generated before it,
    /// including earlier texts in the same batch.
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, MimicError> {
        let mut inner = self.inner.lock().await;
        let mut vectors = Vec::with_capacity(texts.len());

        for text in texts {
            if let Some(existing) = inner.vectors.get(*text) {
                vectors.push(existing.clone());
                continue;
            }

            let score = match inner.docs.get(*text) {
                Some(doc) => doc.score,
                None => {
                    tracing::debug!(
                        "DotProductEmbeddings: no document registered for {text:?}, returning zero vector"
                    );
                    vectors.push(vec![0.0; self.query_vector.len()]);
                    continue;
                }
            };

            let basis = self.basis(&inner);
            let vector = solve(
                inner.source.as_mut(),
                score,
                &self.query_vector,
                &basis,
                self.norm_fn.as_ref(),
                self.max_solve_attempts,
            )?;

            inner.vectors.insert((*text).to_string(), vector.clone());
            inner.generated.push(vector.clone());
            vectors.push(vector);
        }

        Ok(vectors)
    }

    /// Return the fixed query vector. The text is ignored: every query is
    /// "the" query in a store with exactly one reference point.
    async fn embed_query(&self, _text: &str) -> Result<Vec<f32>, MimicError> {
        Ok(self.query_vector.clone())
    }
}

/// Generate the query vector, re-rolling while its final coordinate is zero.
/// The score solver divides by that coordinate, so a zero there would poison
/// every later embed call.
fn roll_query_vector(source: &mut dyn RandomSource, dim: usize) -> Result<Vec<f32>, MimicError> {
    for _ in 0..MAX_QUERY_REROLLS {
        let v = normalized_vector(source, dim);
        if v.iter().all(|&x| x == 0.0) {
            return Err(MimicError::Entropy(
                "random source produced an all-zero query vector".to_string(),
            ));
        }

        match v.last() {
            Some(&last) if last != 0.0 => return Ok(v),
            _ => {}
        }
    }

    Err(MimicError::DegenerateBasis(format!(
        "query vector final coordinate stayed zero after {MAX_QUERY_REROLLS} rolls"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededSource;

    struct ZeroSource;

    impl RandomSource for ZeroSource {
        fn next_normalized(&mut self) -> f32 {
            0.0
        }
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = DotProductEmbeddings::new(0).unwrap_err();
        assert!(matches!(err, MimicError::DimensionMismatch(_)));
    }

    #[test]
    fn dead_source_is_rejected() {
        let err = DotProductEmbeddings::with_source(3, Box::new(ZeroSource)).unwrap_err();
        assert!(matches!(err, MimicError::Entropy(_)));
    }

    #[test]
    fn seeded_stores_share_query_vectors() {
        let a = DotProductEmbeddings::with_source(8, Box::new(SeededSource::new(11))).unwrap();
        let b = DotProductEmbeddings::with_source(8, Box::new(SeededSource::new(11))).unwrap();
        assert_eq!(a.query_vector(), b.query_vector());
        assert_eq!(a.dimension(), 8);
    }
}

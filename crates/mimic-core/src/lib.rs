use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Unified error type for the Mimic crates.
#[derive(Debug, Error)]
pub enum MimicError {
    /// The random source failed badly enough that no usable vector could be
    /// produced (e.g. an all-zero query vector at store construction).
    #[error("entropy error: {0}")]
    Entropy(String),
    /// Vectors of unequal or zero length were given to an operation that
    /// requires a fixed dimension.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// A basis or reference vector violates a precondition that makes the
    /// linear algebra undefined (zero norm, zero final coordinate).
    #[error("degenerate basis: {0}")]
    DegenerateBasis(String),
    /// The score solver exhausted its retry budget without finding a vector
    /// linearly independent of the reference.
    #[error("score solve diverged after {attempts} attempts")]
    ScoreSolveDivergence { attempts: usize },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("embedding error: {0}")]
    Embedding(String),
}

// ---------------------------------------------------------------------------
// ScoredDocument
// ---------------------------------------------------------------------------

/// A document text paired with the similarity score its mock embedding must
/// encode against the store's query vector.
///
/// The score is a value in `[0, 1]`; the generated vector `v` will satisfy
/// `dot(query, v) = 2 * score - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub content: String,
    pub score: f32,
}

impl ScoredDocument {
    pub fn new(content: impl Into<String>, score: f32) -> Self {
        Self {
            content: content.into(),
            score,
        }
    }
}

// ---------------------------------------------------------------------------
// Embeddings trait (forward-declared here, implemented in mimic-embeddings)
// ---------------------------------------------------------------------------

/// Trait for embedding text into vectors.
///
/// This is the surface a vector-store integration consumes; it makes no
/// assumption about whether the vectors come from a real model or a mock.
#[async_trait]
pub trait Embeddings: Send + Sync {
    /// Embed multiple texts (for batch document embedding). The output has
    /// the same length and order as the input.
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, MimicError>;

    /// Embed a single query text.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, MimicError>;
}

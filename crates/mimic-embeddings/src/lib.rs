//! Mock embeddings that encode a prescribed similarity score.
//!
//! [`DotProductEmbeddings`] hands out synthetic vectors whose dot product
//! with a fixed query vector equals `2 * score - 1` for a caller-registered
//! score in `[0, 1]`. This lets vector-store integration tests assert exact
//! retrieval ordering without calling a real embedding model.

mod dot_product;
mod linalg;
mod orthogonal;
mod random;
mod solver;

pub use dot_product::DotProductEmbeddings;
pub use linalg::{dot, linearly_independent};
pub use orthogonal::{independent_vectors, orthogonal_to};
pub use random::{normalized_vector, EntropySource, RandomSource, SeededSource};
pub use solver::{dot_product_norm, NormFn};

// Re-export the core types so a single dependency suffices downstream.
pub use mimic_core::{Embeddings, MimicError, ScoredDocument};

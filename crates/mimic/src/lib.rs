//! Mimic — deterministic mock embeddings for vector-search testing.
//!
//! This crate re-exports the Mimic sub-crates for convenient single-import
//! usage.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mimic::core::{Embeddings, ScoredDocument};
//! use mimic::embeddings::DotProductEmbeddings;
//!
//! let store = DotProductEmbeddings::new(1536)?;
//! store
//!     .register_documents([ScoredDocument::new("cat", 0.9)])
//!     .await?;
//! let vectors = store.embed_documents(&["cat"]).await?;
//! ```

/// Core traits and types: Embeddings, ScoredDocument, MimicError.
/// Always available.
pub use mimic_core as core;

/// The dot-product mock embedder and its building blocks: random sources,
/// Gram-Schmidt orthogonalization, the score solver.
#[cfg(feature = "embeddings")]
pub use mimic_embeddings as embeddings;

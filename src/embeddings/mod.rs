//! # Sentence embeddings
//!
//! Ranking compares a document and its candidate phrases in a shared vector
//! space. The space itself is not provided by this crate's pipeline: any
//! encoder can be plugged in through the [`SentenceEmbedder`] trait, from a
//! transformer model behind an FFI boundary to a remote embedding service.
//!
//! The built-in [`HashingEmbedder`] is a deterministic, dependency-free
//! implementation based on the signed hashing trick. It captures lexical
//! overlap rather than semantics, which is enough for reproducible tests and
//! for ranking by shared vocabulary.
//!
//! ```
//! use keyrank::embeddings::{HashingEmbedder, SentenceEmbedder};
//!
//! let embedder = HashingEmbedder::default();
//! let embeddings = embedder.encode(&["keyword extraction", "embedding spaces"])?;
//! assert_eq!(embeddings.len(), 2);
//! # Ok::<(), keyrank::KeyRankError>(())
//! ```

mod hashing;

pub use hashing::{HashingEmbedder, DEFAULT_EMBEDDING_DIM};

use crate::common::error::KeyRankError;

/// A dense vector representing a piece of text.
pub type Embedding = Vec<f32>;

/// # Text encoder used by the ranking stage
///
/// Implementations encode a batch of texts into one embedding per input, in
/// input order. All embeddings produced by one encoder must share the same
/// dimension.
///
/// # Errors
///
/// An encoder that cannot produce embeddings (model failure, service outage)
/// returns `KeyRankError::EmbeddingUnavailableError`. The ranking stage
/// propagates the error unchanged and never retries.
pub trait SentenceEmbedder {
    fn encode(&self, inputs: &[&str]) -> Result<Vec<Embedding>, KeyRankError>;
}

//! # keyrank
//!
//! Embedding-based keyword extraction. A document is scanned for candidate
//! phrases whose part-of-speech tags match a chunk grammar, the document and
//! every candidate are embedded by a pluggable encoder, and candidates are
//! ranked by cosine similarity to the document.
//!
//! The encoder is injected through the
//! [`SentenceEmbedder`](embeddings::SentenceEmbedder) trait; the built-in
//! [`HashingEmbedder`](embeddings::HashingEmbedder) provides a deterministic
//! default that ranks by shared vocabulary.
//!
//! ```
//! use keyrank::{KeywordExtractionConfig, KeywordExtractionModel};
//!
//! # fn main() -> anyhow::Result<()> {
//! let model = KeywordExtractionModel::new(KeywordExtractionConfig::default())?;
//! let keywords = model.extract_keywords(
//!     "Deep learning models require large labeled datasets for training.",
//!     3,
//! )?;
//!
//! assert_eq!(keywords.len(), 3);
//! for pair in keywords.windows(2) {
//!     assert!(pair[0].score >= pair[1].score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod candidates;
pub mod common;
pub mod embeddings;
pub mod keywords;

pub use common::error::KeyRankError;
pub use keywords::{
    CachedKeywordExtractionModel, Keyword, KeywordExtractionConfig, KeywordExtractionModel,
    KeywordExtractionOptions, KeywordScorerType,
};

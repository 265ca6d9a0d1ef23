//! # Phrase candidate extraction
//!
//! Scans an input document and produces the set of candidate keyphrases that
//! the ranking stage scores against the document. Candidates are contiguous
//! spans whose part-of-speech tags match a configurable chunk grammar
//! (default: zero or more adjectives followed by one or more nouns).
//!
//! The stage is a plain composition of three steps, each replaceable:
//! regex word tokenization ([`WordTokenizer`]), part-of-speech tagging
//! ([`PosTagger`], with the deterministic [`LexiconTagger`] as the built-in
//! implementation) and grammar chunking ([`PhraseGrammar`]).
//!
//! ```
//! use keyrank::candidates::CandidateExtractor;
//!
//! let extractor = CandidateExtractor::default();
//! let candidates =
//!     extractor.extract("Deep learning models require large labeled datasets for training.");
//!
//! let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(
//!     texts,
//!     ["Deep learning models", "large labeled datasets", "training"]
//! );
//! ```

mod extractor;
mod grammar;
mod stopwords;
mod tagger;
mod tokenizer;

pub use extractor::CandidateExtractor;
pub use grammar::PhraseGrammar;
pub use stopwords::ENGLISH_STOPWORDS;
pub use tagger::{LexiconTagger, PosTag, PosTagger};
pub use tokenizer::{WordToken, WordTokenizer};

use serde::{Deserialize, Serialize};

/// Offset units for the `begin` and `end` fields of an [`Offset`].
pub type OffsetSize = u32;

/// Byte span of a token or phrase occurrence in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub begin: OffsetSize,
    pub end: OffsetSize,
}

/// # Candidate keyphrase produced by the extraction stage
///
/// The surface text keeps the casing of the first occurrence, with tokens
/// joined by single spaces. Candidates are deduplicated case-insensitively;
/// `offsets` accumulates the span of every occurrence in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePhrase {
    /// Surface text of the phrase (original casing, whitespace-normalized)
    pub text: String,
    /// Byte spans of all occurrences in the source document
    pub offsets: Vec<Offset>,
}

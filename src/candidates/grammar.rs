use crate::candidates::tagger::PosTag;
use crate::common::error::KeyRankError;
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

/// Default phrase grammar: zero or more adjectives followed by one or more
/// nouns (common or proper).
pub const DEFAULT_GRAMMAR_PATTERN: &str = r"J*[NP]+";

lazy_static! {
    static ref DEFAULT_GRAMMAR: Regex = Regex::new(DEFAULT_GRAMMAR_PATTERN).unwrap();
}

/// # Phrase grammar over part-of-speech tags
///
/// A grammar is a regular expression over the single-character tag symbols of
/// [`PosTag::symbol`]. A tagged token sequence is rendered as a symbol string
/// ("JNNVI"...), and every non-overlapping match of the pattern delimits one
/// phrase. Matching is leftmost-first without backtracking into consumed
/// symbols, so a token belongs to at most one phrase.
///
/// Tag symbols are ASCII, which keeps byte positions in the symbol string
/// identical to token indices.
#[derive(Debug, Clone)]
pub struct PhraseGrammar {
    pattern: Regex,
}

impl Default for PhraseGrammar {
    fn default() -> Self {
        PhraseGrammar {
            pattern: DEFAULT_GRAMMAR.clone(),
        }
    }
}

impl PhraseGrammar {
    /// Compiles a grammar from a regex pattern over tag symbols.
    ///
    /// # Errors
    ///
    /// Returns `KeyRankError::InvalidConfigurationError` if the pattern is
    /// not a valid regular expression.
    pub fn from_pattern(pattern: &str) -> Result<PhraseGrammar, KeyRankError> {
        Ok(PhraseGrammar {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The source pattern of this grammar.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Finds every phrase in a tag sequence, as half-open token index ranges
    /// in left-to-right order. Empty matches are discarded.
    pub fn find_phrases(&self, tags: &[PosTag]) -> Vec<Range<usize>> {
        let symbols: String = tags.iter().map(|tag| tag.symbol()).collect();
        self.pattern
            .find_iter(&symbols)
            .map(|found| found.start()..found.end())
            .filter(|range| !range.is_empty())
            .collect()
    }
}

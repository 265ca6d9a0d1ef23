use crate::candidates::{Offset, OffsetSize};
use lazy_static::lazy_static;
use regex::Regex;

const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(DEFAULT_TOKEN_PATTERN).unwrap();
}

/// A word token referencing its slice of the source document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordToken<'a> {
    pub text: &'a str,
    pub offset: Offset,
}

/// # Regex word tokenizer
///
/// Splits a document into word tokens with byte offsets. The default
/// pattern `(?u)\b\w\w+\b` keeps words of at least two word characters and
/// drops punctuation and single letters.
pub struct WordTokenizer {
    pattern: Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WordTokenizer {
    /// Build a new `WordTokenizer`.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Optional token pattern overriding the default.
    pub fn new(pattern: Option<Regex>) -> Self {
        let pattern = pattern.unwrap_or_else(|| TOKEN_PATTERN.clone());
        Self { pattern }
    }

    /// Tokenizes a document into word tokens with offsets, in document order.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<WordToken<'a>> {
        self.pattern
            .find_iter(text)
            .map(|hit| WordToken {
                text: hit.as_str(),
                offset: Offset {
                    begin: hit.start() as OffsetSize,
                    end: hit.end() as OffsetSize,
                },
            })
            .collect()
    }
}

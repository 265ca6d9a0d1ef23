use crate::candidates::grammar::PhraseGrammar;
use crate::candidates::stopwords::ENGLISH_STOPWORDS;
use crate::candidates::tagger::{LexiconTagger, PosTagger};
use crate::candidates::tokenizer::{WordToken, WordTokenizer};
use crate::candidates::{CandidatePhrase, Offset};
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};
use std::ops::Range;

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static str> = HashSet::from(ENGLISH_STOPWORDS);
}

/// # Candidate phrase extractor
///
/// Runs the full extraction stage: word tokenization, part-of-speech tagging
/// and grammar chunking, followed by case-insensitive deduplication. Grammar
/// matching never crosses phrase-breaking punctuation (sentence boundaries,
/// commas, brackets), so a candidate always comes from a contiguous stretch
/// of running text.
///
/// Candidates whose words are all stopwords are discarded. The remaining
/// phrases keep their discovery order: first occurrence in the document,
/// scanning left to right.
pub struct CandidateExtractor {
    tokenizer: WordTokenizer,
    tagger: Box<dyn PosTagger>,
    grammar: PhraseGrammar,
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        CandidateExtractor {
            tokenizer: WordTokenizer::default(),
            tagger: Box::new(LexiconTagger::new()),
            grammar: PhraseGrammar::default(),
        }
    }
}

impl CandidateExtractor {
    /// Build a new `CandidateExtractor`.
    ///
    /// # Arguments
    ///
    /// * `tokenizer` - Word tokenizer splitting the document into tokens.
    /// * `tagger` - Part-of-speech tagger implementation.
    /// * `grammar` - Chunk grammar selecting which tag sequences form phrases.
    pub fn new(
        tokenizer: WordTokenizer,
        tagger: Box<dyn PosTagger>,
        grammar: PhraseGrammar,
    ) -> Self {
        CandidateExtractor {
            tokenizer,
            tagger,
            grammar,
        }
    }

    /// Extracts the deduplicated candidate phrases of a document, in
    /// discovery order. An empty or candidate-free document yields an empty
    /// list.
    pub fn extract(&self, document: &str) -> Vec<CandidatePhrase> {
        let tokens = self.tokenizer.tokenize(document);
        if tokens.is_empty() {
            return Vec::new();
        }
        let tags = self.tagger.tag(document, &tokens);
        debug_assert_eq!(tags.len(), tokens.len());

        let mut candidates: Vec<CandidatePhrase> = Vec::new();
        let mut candidate_indices: HashMap<String, usize> = HashMap::new();
        for segment in split_at_phrase_breaks(document, &tokens) {
            for phrase in self.grammar.find_phrases(&tags[segment.clone()]) {
                let phrase_tokens =
                    &tokens[segment.start + phrase.start..segment.start + phrase.end];
                if phrase_tokens
                    .iter()
                    .all(|token| STOPWORD_SET.contains(token.text.to_lowercase().as_str()))
                {
                    continue;
                }
                let text = phrase_tokens
                    .iter()
                    .map(|token| token.text)
                    .collect::<Vec<&str>>()
                    .join(" ");
                let offset = Offset {
                    begin: phrase_tokens[0].offset.begin,
                    end: phrase_tokens[phrase_tokens.len() - 1].offset.end,
                };
                let normalized = text.to_lowercase();
                match candidate_indices.get(&normalized) {
                    Some(&index) => candidates[index].offsets.push(offset),
                    None => {
                        candidate_indices.insert(normalized, candidates.len());
                        candidates.push(CandidatePhrase {
                            text,
                            offsets: vec![offset],
                        });
                    }
                }
            }
        }
        candidates
    }
}

/// Splits the token sequence into maximal runs not interrupted by
/// phrase-breaking punctuation, as token index ranges.
fn split_at_phrase_breaks(document: &str, tokens: &[WordToken]) -> Vec<Range<usize>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for index in 1..tokens.len() {
        let gap_start = tokens[index - 1].offset.end as usize;
        let gap_end = tokens[index].offset.begin as usize;
        if document[gap_start..gap_end].chars().any(is_phrase_break) {
            segments.push(start..index);
            start = index;
        }
    }
    if start < tokens.len() {
        segments.push(start..tokens.len());
    }
    segments
}

fn is_phrase_break(character: char) -> bool {
    matches!(
        character,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\u{201c}'
            | '\u{201d}'
            | '\u{2026}'
            | '\u{2013}'
            | '\u{2014}'
            | '|'
            | '\n'
    )
}

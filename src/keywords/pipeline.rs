use crate::candidates::{CandidateExtractor, LexiconTagger, PhraseGrammar, WordTokenizer};
use crate::common::config::Config;
use crate::common::error::KeyRankError;
use crate::embeddings::{Embedding, HashingEmbedder, SentenceEmbedder};
use crate::keywords::ranker::{Keyword, KeywordRanker};
use crate::keywords::scorer::KeywordScorerType;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// File-loadable options for keyword extraction.
///
/// Covers everything that serializes: scorer settings and the extraction
/// patterns. Combine with an encoder through
/// [`KeywordExtractionConfig::from_options`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordExtractionOptions {
    /// Scorer picking keywords from the candidates
    pub scorer_type: KeywordScorerType,
    /// Number of keywords returned per document
    pub num_keywords: usize,
    /// Diversity in `[0, 1]` for the maximal margin relevance scorer
    pub diversity: Option<f32>,
    /// Candidate pool size for the max sum scorer
    pub max_sum_candidates: Option<usize>,
    /// Word tokenization regex (defaults to words of two or more characters)
    pub token_pattern: Option<String>,
    /// Chunk grammar over part-of-speech tag symbols
    pub grammar_pattern: Option<String>,
}

impl Default for KeywordExtractionOptions {
    fn default() -> Self {
        KeywordExtractionOptions {
            scorer_type: KeywordScorerType::CosineSimilarity,
            num_keywords: 5,
            diversity: None,
            max_sum_candidates: None,
            token_pattern: None,
            grammar_pattern: None,
        }
    }
}

impl Config for KeywordExtractionOptions {}

/// Configuration for [`KeywordExtractionModel`].
pub struct KeywordExtractionConfig<E> {
    /// Encoder embedding the document and its candidate phrases
    pub embedder: E,
    /// Candidate phrase extractor
    pub extractor: CandidateExtractor,
    /// Scorer picking keywords from the candidates
    pub scorer_type: KeywordScorerType,
    /// Number of keywords returned per document by [`KeywordExtractionModel::predict`]
    pub num_keywords: usize,
    /// Diversity in `[0, 1]` for the maximal margin relevance scorer
    pub diversity: Option<f32>,
    /// Candidate pool size for the max sum scorer
    pub max_sum_candidates: Option<usize>,
}

impl Default for KeywordExtractionConfig<HashingEmbedder> {
    fn default() -> Self {
        KeywordExtractionConfig::new(HashingEmbedder::default())
    }
}

impl<E> KeywordExtractionConfig<E> {
    /// Configuration with default extraction and scoring for a given encoder.
    pub fn new(embedder: E) -> KeywordExtractionConfig<E> {
        KeywordExtractionConfig {
            embedder,
            extractor: CandidateExtractor::default(),
            scorer_type: KeywordScorerType::CosineSimilarity,
            num_keywords: 5,
            diversity: None,
            max_sum_candidates: None,
        }
    }

    /// Builds a configuration from file-loadable options and an encoder.
    ///
    /// # Errors
    ///
    /// Returns `KeyRankError::InvalidConfigurationError` if the token or
    /// grammar pattern does not compile.
    pub fn from_options(
        embedder: E,
        options: KeywordExtractionOptions,
    ) -> Result<KeywordExtractionConfig<E>, KeyRankError> {
        let tokenizer = match &options.token_pattern {
            Some(pattern) => WordTokenizer::new(Some(Regex::new(pattern)?)),
            None => WordTokenizer::default(),
        };
        let grammar = match &options.grammar_pattern {
            Some(pattern) => PhraseGrammar::from_pattern(pattern)?,
            None => PhraseGrammar::default(),
        };
        let extractor = CandidateExtractor::new(tokenizer, Box::new(LexiconTagger::new()), grammar);
        Ok(KeywordExtractionConfig {
            embedder,
            extractor,
            scorer_type: options.scorer_type,
            num_keywords: options.num_keywords,
            diversity: options.diversity,
            max_sum_candidates: options.max_sum_candidates,
        })
    }
}

/// # Keyword extraction pipeline
///
/// Composes the three stages of keyword extraction: candidate phrases come
/// from the [`CandidateExtractor`], the encoder embeds the document and every
/// candidate, and the [`KeywordRanker`] orders candidates by similarity to
/// the document.
pub struct KeywordExtractionModel<E> {
    extractor: CandidateExtractor,
    embedder: E,
    ranker: KeywordRanker,
    num_keywords: usize,
}

impl<E: SentenceEmbedder> KeywordExtractionModel<E> {
    /// Build a new `KeywordExtractionModel`
    ///
    /// # Arguments
    ///
    /// * `config` - `KeywordExtractionConfig` object containing an encoder, a candidate
    ///   extractor and scoring options
    pub fn new(
        config: KeywordExtractionConfig<E>,
    ) -> Result<KeywordExtractionModel<E>, KeyRankError> {
        if let Some(diversity) = config.diversity {
            if !(0f32..=1f32).contains(&diversity) {
                return Err(KeyRankError::InvalidConfigurationError(format!(
                    "Diversity must lie in [0, 1], got {}",
                    diversity
                )));
            }
        }
        let ranker = KeywordRanker::new(
            config.scorer_type,
            config.diversity,
            config.max_sum_candidates,
        );
        Ok(KeywordExtractionModel {
            extractor: config.extractor,
            embedder: config.embedder,
            ranker,
            num_keywords: config.num_keywords,
        })
    }

    /// Extracts the `top_n` best keywords of a document.
    ///
    /// The document is embedded once, every candidate phrase once, and
    /// candidates are ranked by similarity to the document. A `top_n` larger
    /// than the number of candidates returns every candidate; a `top_n` of
    /// zero returns an empty list. Documents without candidates also yield
    /// an empty list, without consulting the encoder.
    ///
    /// # Errors
    ///
    /// * `KeyRankError::InvalidInputError` - the document is empty or
    ///   whitespace-only.
    /// * `KeyRankError::EmbeddingUnavailableError` - the encoder failed;
    ///   encoder errors propagate unchanged and are never retried.
    pub fn extract_keywords(
        &self,
        document: &str,
        top_n: usize,
    ) -> Result<Vec<Keyword>, KeyRankError> {
        if document.trim().is_empty() {
            return Err(KeyRankError::InvalidInputError(
                "Cannot extract keywords from an empty document".to_string(),
            ));
        }
        if top_n == 0 {
            return Ok(Vec::new());
        }
        let candidates = self.extractor.extract(document);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        let document_embedding = self.encode_document(document)?;
        let candidate_texts: Vec<&str> = candidates
            .iter()
            .map(|candidate| candidate.text.as_str())
            .collect();
        let candidate_embeddings = self.embedder.encode(&candidate_texts)?;
        self.ranker
            .rank(&document_embedding, candidates, &candidate_embeddings, top_n)
    }

    /// Extracts keywords for a batch of documents, returning the configured
    /// number of keywords for each.
    pub fn predict<S>(&self, inputs: &[S]) -> Result<Vec<Vec<Keyword>>, KeyRankError>
    where
        S: AsRef<str>,
    {
        inputs
            .iter()
            .map(|input| self.extract_keywords(input.as_ref(), self.num_keywords))
            .collect()
    }

    /// Number of keywords returned per document by [`Self::predict`].
    pub fn num_keywords(&self) -> usize {
        self.num_keywords
    }

    fn encode_document(&self, document: &str) -> Result<Embedding, KeyRankError> {
        let mut embeddings = self.embedder.encode(&[document])?;
        if embeddings.len() != 1 {
            return Err(KeyRankError::EmbeddingUnavailableError(format!(
                "Expected 1 document embedding, got {}",
                embeddings.len()
            )));
        }
        Ok(embeddings.remove(0))
    }
}

use crate::candidates::{CandidatePhrase, Offset};
use crate::common::error::KeyRankError;
use crate::embeddings::Embedding;
use crate::keywords::scorer::KeywordScorerType;
use serde::{Deserialize, Serialize};
use std::mem;

/// A ranked keyword with its similarity score and source document spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub score: f32,
    pub offsets: Vec<Offset>,
}

/// # Keyword ranker
///
/// Turns scored candidate indices into [`Keyword`] values. The ranker
/// validates the embedding batch before scoring: one embedding per
/// candidate, all sharing the document embedding's dimension. A malformed
/// batch means the encoder did not deliver usable embeddings and surfaces
/// as `KeyRankError::EmbeddingUnavailableError`.
#[derive(Debug, Clone)]
pub struct KeywordRanker {
    scorer_type: KeywordScorerType,
    diversity: Option<f32>,
    max_sum_candidates: Option<usize>,
}

impl KeywordRanker {
    /// Build a new `KeywordRanker`.
    ///
    /// # Arguments
    ///
    /// * `scorer_type` - Scorer picking keywords from the candidates.
    /// * `diversity` - Diversity in `[0, 1]` for the maximal margin
    ///   relevance scorer (defaults to 0.5).
    /// * `max_sum_candidates` - Candidate pool size for the max sum scorer
    ///   (defaults to twice the number of keywords).
    pub fn new(
        scorer_type: KeywordScorerType,
        diversity: Option<f32>,
        max_sum_candidates: Option<usize>,
    ) -> KeywordRanker {
        KeywordRanker {
            scorer_type,
            diversity,
            max_sum_candidates,
        }
    }

    /// Ranks candidates against the document embedding and returns at most
    /// `num_keywords` keywords. Requesting more keywords than there are
    /// candidates returns them all.
    ///
    /// # Errors
    ///
    /// Returns `KeyRankError::EmbeddingUnavailableError` if the candidate
    /// embedding batch does not line up with the candidates or the document
    /// embedding.
    pub fn rank(
        &self,
        document_embedding: &[f32],
        mut candidates: Vec<CandidatePhrase>,
        candidate_embeddings: &[Embedding],
        num_keywords: usize,
    ) -> Result<Vec<Keyword>, KeyRankError> {
        if candidate_embeddings.len() != candidates.len() {
            return Err(KeyRankError::EmbeddingUnavailableError(format!(
                "Expected {} candidate embeddings, got {}",
                candidates.len(),
                candidate_embeddings.len()
            )));
        }
        if document_embedding.is_empty() {
            return Err(KeyRankError::EmbeddingUnavailableError(
                "Document embedding is empty".to_string(),
            ));
        }
        if let Some(mismatched) = candidate_embeddings
            .iter()
            .find(|embedding| embedding.len() != document_embedding.len())
        {
            return Err(KeyRankError::EmbeddingUnavailableError(format!(
                "Candidate embedding dimension {} does not match document embedding dimension {}",
                mismatched.len(),
                document_embedding.len()
            )));
        }

        let ranked = self.scorer_type.score_keywords(
            document_embedding,
            candidate_embeddings,
            num_keywords,
            self.diversity,
            self.max_sum_candidates,
        );
        Ok(ranked
            .into_iter()
            .map(|(index, score)| Keyword {
                text: mem::take(&mut candidates[index].text),
                score,
                offsets: mem::take(&mut candidates[index].offsets),
            })
            .collect())
    }
}

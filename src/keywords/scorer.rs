use crate::embeddings::Embedding;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min, Reverse};

/// # Scorer used to pick keywords from candidate phrases
///
/// All scorers compare embeddings by cosine similarity and return
/// `(candidate index, document similarity)` pairs:
///
/// * `CosineSimilarity` ranks candidates by similarity to the document, in
///   descending order with ties broken toward the earlier candidate;
/// * `MaximalMarginRelevance` trades similarity against redundancy with the
///   already selected keywords, returning keywords in selection order;
/// * `MaxSum` picks, among the best-matching candidates, the combination
///   with the least pairwise similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordScorerType {
    CosineSimilarity,
    MaximalMarginRelevance,
    MaxSum,
}

impl KeywordScorerType {
    pub(crate) fn score_keywords(
        &self,
        document_embedding: &[f32],
        word_embeddings: &[Embedding],
        num_keywords: usize,
        diversity: Option<f32>,
        max_sum_candidates: Option<usize>,
    ) -> Vec<(usize, f32)> {
        if num_keywords == 0 || word_embeddings.is_empty() {
            return Vec::new();
        }
        match self {
            KeywordScorerType::CosineSimilarity => {
                cosine_similarity_score(document_embedding, word_embeddings, num_keywords)
            }
            KeywordScorerType::MaximalMarginRelevance => maximal_margin_relevance_score(
                document_embedding,
                word_embeddings,
                num_keywords,
                diversity.unwrap_or(0.5),
            ),
            KeywordScorerType::MaxSum => {
                let num_keyword_candidates = word_embeddings.len();
                max_sum_score(
                    document_embedding,
                    word_embeddings,
                    num_keywords,
                    min(
                        max_sum_candidates.unwrap_or(num_keywords * 2),
                        num_keyword_candidates,
                    ),
                )
            }
        }
    }
}

/// Cosine of the angle between two embeddings. Zero vectors have zero
/// similarity to everything.
pub(crate) fn cosine_similarity(left: &[f32], right: &[f32]) -> f32 {
    let dot: f32 = left.iter().zip(right).map(|(x, y)| x * y).sum();
    let left_norm: f32 = left.iter().map(|x| x * x).sum::<f32>().sqrt();
    let right_norm: f32 = right.iter().map(|x| x * x).sum::<f32>().sqrt();
    if left_norm == 0f32 || right_norm == 0f32 {
        0f32
    } else {
        dot / (left_norm * right_norm)
    }
}

fn document_similarities(document_embedding: &[f32], word_embeddings: &[Embedding]) -> Vec<f32> {
    word_embeddings
        .iter()
        .map(|embedding| cosine_similarity(document_embedding, embedding))
        .collect()
}

/// Index of the highest value, taking the earliest on ties.
fn argmax(values: impl Iterator<Item = f32>) -> Option<usize> {
    values
        .enumerate()
        .max_by_key(|(index, value)| (OrderedFloat(*value), Reverse(*index)))
        .map(|(index, _)| index)
}

fn cosine_similarity_score(
    document_embedding: &[f32],
    word_embeddings: &[Embedding],
    num_keywords: usize,
) -> Vec<(usize, f32)> {
    let similarities = document_similarities(document_embedding, word_embeddings);

    let mut ranked: Vec<(usize, f32)> = similarities.into_iter().enumerate().collect();
    ranked.sort_by_key(|(index, score)| (Reverse(OrderedFloat(*score)), *index));
    ranked.truncate(num_keywords);
    ranked
}

fn maximal_margin_relevance_score(
    document_embedding: &[f32],
    word_embeddings: &[Embedding],
    num_keywords: usize,
    diversity: f32,
) -> Vec<(usize, f32)> {
    let word_document_similarities = document_similarities(document_embedding, word_embeddings);
    let word_similarities: Vec<Vec<f32>> = word_embeddings
        .iter()
        .map(|left| {
            word_embeddings
                .iter()
                .map(|right| cosine_similarity(left, right))
                .collect()
        })
        .collect();

    let first_keyword = argmax(word_document_similarities.iter().copied()).unwrap();
    let mut keyword_indices = vec![first_keyword];
    let mut candidate_indices: Vec<usize> = (0..word_document_similarities.len())
        .filter(|index| *index != first_keyword)
        .collect();
    while keyword_indices.len() < num_keywords && !candidate_indices.is_empty() {
        let relevances = candidate_indices.iter().map(|&candidate| {
            let target_similarity = keyword_indices
                .iter()
                .map(|&keyword| OrderedFloat(word_similarities[candidate][keyword]))
                .max()
                .map(|value| value.0)
                .unwrap_or(0f32);
            word_document_similarities[candidate] * (1f32 - diversity)
                - target_similarity * diversity
        });
        let best_candidate = argmax(relevances).unwrap();
        keyword_indices.push(candidate_indices.remove(best_candidate));
    }

    keyword_indices
        .into_iter()
        .map(|index| (index, word_document_similarities[index]))
        .collect()
}

fn max_sum_score(
    document_embedding: &[f32],
    word_embeddings: &[Embedding],
    num_keywords: usize,
    max_sum_candidates: usize,
) -> Vec<(usize, f32)> {
    let max_sum_candidates = max(num_keywords, max_sum_candidates);
    let word_document_similarities = document_similarities(document_embedding, word_embeddings);
    let word_similarities: Vec<Vec<f32>> = word_embeddings
        .iter()
        .map(|left| {
            word_embeddings
                .iter()
                .map(|right| cosine_similarity(left, right))
                .collect()
        })
        .collect();

    let mut pool: Vec<(usize, f32)> = word_document_similarities
        .iter()
        .copied()
        .enumerate()
        .collect();
    pool.sort_by_key(|(index, score)| (Reverse(OrderedFloat(*score)), *index));
    pool.truncate(max_sum_candidates);
    let pool: Vec<usize> = pool.into_iter().map(|(index, _)| index).collect();
    let num_keywords = min(num_keywords, pool.len());

    let (mut best_score, mut best_combination) = (None, None);
    for combination in combinations(&pool, num_keywords) {
        let combination_score: f32 = combination
            .iter()
            .enumerate()
            .flat_map(|(position, &left)| {
                let word_similarities = &word_similarities;
                combination[position + 1..]
                    .iter()
                    .map(move |&right| word_similarities[left][right])
            })
            .sum();
        if best_score.map_or(true, |current_best| combination_score < current_best) {
            best_score = Some(combination_score);
            best_combination = Some(combination);
        }
    }

    best_combination
        .unwrap_or_default()
        .into_iter()
        .map(|index| (index, word_document_similarities[index]))
        .collect()
}

/// All size-`k` combinations of `pool`, preserving pool order within each
/// combination and enumerating in lexicographic pool order.
fn combinations(pool: &[usize], k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if pool.len() < k {
        return Vec::new();
    }
    let mut output = Vec::new();
    for (position, &first) in pool.iter().enumerate() {
        if pool.len() - position < k {
            break;
        }
        for mut tail in combinations(&pool[position + 1..], k - 1) {
            let mut combination = Vec::with_capacity(k);
            combination.push(first);
            combination.append(&mut tail);
            output.push(combination);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unnormalized on purpose, cosine_similarity normalizes internally:
    // sim(a, b) = 0.8, sim(a, c) = 0.0, sim(b, c) = 0.6.
    fn embeddings() -> Vec<Embedding> {
        vec![vec![1f32, 0f32], vec![4f32, 3f32], vec![0f32, 1f32]]
    }

    #[test]
    fn cosine_scorer_ranks_by_descending_document_similarity() {
        let scores = KeywordScorerType::CosineSimilarity.score_keywords(
            &[1f32, 0f32],
            &embeddings(),
            3,
            None,
            None,
        );
        let indices: Vec<usize> = scores.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert!((scores[0].1 - 1f32).abs() < 1e-6);
        assert!((scores[1].1 - 0.8f32).abs() < 1e-6);
        assert!(scores[2].1.abs() < 1e-6);
    }

    #[test]
    fn cosine_scorer_breaks_ties_toward_earlier_candidates() {
        let tied = vec![vec![3f32, 4f32], vec![6f32, 8f32]];
        let scores =
            KeywordScorerType::CosineSimilarity.score_keywords(&[3f32, 4f32], &tied, 2, None, None);
        let indices: Vec<usize> = scores.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn requesting_more_keywords_than_candidates_returns_all() {
        let scores = KeywordScorerType::CosineSimilarity.score_keywords(
            &[1f32, 0f32],
            &embeddings(),
            10,
            None,
            None,
        );
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn zero_keywords_returns_nothing() {
        for scorer in [
            KeywordScorerType::CosineSimilarity,
            KeywordScorerType::MaximalMarginRelevance,
            KeywordScorerType::MaxSum,
        ] {
            assert!(scorer
                .score_keywords(&[1f32, 0f32], &embeddings(), 0, None, None)
                .is_empty());
        }
    }

    #[test]
    fn empty_candidates_return_nothing() {
        assert!(KeywordScorerType::CosineSimilarity
            .score_keywords(&[1f32, 0f32], &[], 3, None, None)
            .is_empty());
    }

    #[test]
    fn maximal_margin_relevance_diversifies_the_selection() {
        // With high diversity the runner-up by document similarity (index 1,
        // close to index 0) loses to the orthogonal candidate (index 2).
        let scores = KeywordScorerType::MaximalMarginRelevance.score_keywords(
            &[1f32, 0f32],
            &embeddings(),
            2,
            Some(0.9),
            None,
        );
        let indices: Vec<usize> = scores.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [0, 2]);
        // Scores stay document similarities even in selection order.
        assert!((scores[0].1 - 1f32).abs() < 1e-6);
        assert!(scores[1].1.abs() < 1e-6);
    }

    #[test]
    fn maximal_margin_relevance_with_low_diversity_follows_similarity() {
        let scores = KeywordScorerType::MaximalMarginRelevance.score_keywords(
            &[1f32, 0f32],
            &embeddings(),
            2,
            Some(0.0),
            None,
        );
        let indices: Vec<usize> = scores.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn max_sum_picks_the_least_redundant_combination() {
        // Pairwise similarities: (0, 1) = 0.8, (0, 2) = 0.0, (1, 2) = 0.6,
        // so the best pair is the orthogonal (0, 2).
        let scores = KeywordScorerType::MaxSum.score_keywords(
            &[1f32, 0f32],
            &embeddings(),
            2,
            None,
            Some(3),
        );
        let indices: Vec<usize> = scores.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [0, 2]);
    }

    #[test]
    fn max_sum_limits_the_search_to_the_candidate_pool() {
        // Document similarities 1.0, 0.8, 0.0, 0.6: a pool of three keeps
        // indices 0, 1 and 3, so the zero-similarity pair (0, 2) is out of
        // reach. Within the pool, (0, 1) = 0.8, (0, 3) = 0.6 and
        // (1, 3) = 0.96 make (0, 3) the least redundant pair.
        let embeddings = vec![
            vec![1f32, 0f32],
            vec![4f32, 3f32],
            vec![0f32, 1f32],
            vec![3f32, 4f32],
        ];
        let scores =
            KeywordScorerType::MaxSum.score_keywords(&[1f32, 0f32], &embeddings, 2, None, Some(3));
        let indices: Vec<usize> = scores.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [0, 3]);
        assert!((scores[0].1 - 1f32).abs() < 1e-6);
        assert!((scores[1].1 - 0.6f32).abs() < 1e-6);
    }

    #[test]
    fn combinations_enumerate_in_pool_order() {
        assert_eq!(
            combinations(&[7, 8, 9], 2),
            [vec![7, 8], vec![7, 9], vec![8, 9]]
        );
        assert_eq!(combinations(&[7, 8], 3), Vec::<Vec<usize>>::new());
        assert_eq!(combinations(&[7, 8], 0), [Vec::<usize>::new()]);
    }

    #[test]
    fn zero_vectors_have_zero_similarity() {
        assert_eq!(cosine_similarity(&[0f32, 0f32], &[1f32, 0f32]), 0f32);
        assert_eq!(cosine_similarity(&[], &[]), 0f32);
    }
}

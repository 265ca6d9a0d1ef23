use crate::common::error::KeyRankError;
use crate::embeddings::{Embedding, SentenceEmbedder};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Default dimension of [`HashingEmbedder`] vectors.
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// # Signed feature-hashing embedder
///
/// Encodes a text as a bag of hashed words: every word adds `+1` or `-1`
/// (sign taken from its hash) to one component of the vector, and the result
/// is L2-normalized. Two texts then score by the cosine of their shared
/// vocabulary, with hash collisions as the only source of noise.
///
/// Words are lowercased before hashing, so the embedding is
/// case-insensitive. Hashing uses `FxHasher`, which is stable across runs
/// and processes. Texts without any word map to the zero vector.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        HashingEmbedder {
            dimension: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl HashingEmbedder {
    /// Build a new `HashingEmbedder`.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Length of the produced vectors. Must be non-zero.
    ///
    /// # Errors
    ///
    /// Returns `KeyRankError::InvalidConfigurationError` for a zero
    /// dimension.
    pub fn new(dimension: usize) -> Result<HashingEmbedder, KeyRankError> {
        if dimension == 0 {
            return Err(KeyRankError::InvalidConfigurationError(
                "Embedding dimension must be non-zero".to_string(),
            ));
        }
        Ok(HashingEmbedder { dimension })
    }

    /// Dimension of the produced vectors.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Embedding {
        let mut values = vec![0f32; self.dimension];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            let mut hasher = FxHasher::default();
            word.to_lowercase().hash(&mut hasher);
            let hash = hasher.finish();
            let index = (hash as usize) % self.dimension;
            let sign = if hash >> 63 == 0 { 1f32 } else { -1f32 };
            values[index] += sign;
        }
        let norm = values.iter().map(|value| value * value).sum::<f32>().sqrt();
        if norm > 0f32 {
            for value in values.iter_mut() {
                *value /= norm;
            }
        }
        values
    }
}

impl SentenceEmbedder for HashingEmbedder {
    fn encode(&self, inputs: &[&str]) -> Result<Vec<Embedding>, KeyRankError> {
        Ok(inputs.iter().map(|input| self.embed(input)).collect())
    }
}

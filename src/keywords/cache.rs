use crate::common::error::KeyRankError;
use crate::embeddings::SentenceEmbedder;
use crate::keywords::pipeline::KeywordExtractionModel;
use crate::keywords::ranker::Keyword;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// # Memoizing wrapper around [`KeywordExtractionModel`]
///
/// Caches extraction results keyed by the exact `(document, top_n)` pair:
/// any change to the document text or the requested count is a cache miss.
/// Only successful extractions are stored; a call that failed leaves no
/// entry, so the next call with the same arguments consults the model again.
///
/// The cache lock is not held while the model runs. Concurrent misses on
/// the same key may each compute the result, with the last one stored.
pub struct CachedKeywordExtractionModel<E> {
    model: KeywordExtractionModel<E>,
    cache: Mutex<HashMap<(String, usize), Vec<Keyword>>>,
}

impl<E: SentenceEmbedder> CachedKeywordExtractionModel<E> {
    /// Build a new `CachedKeywordExtractionModel` wrapping a model.
    pub fn new(model: KeywordExtractionModel<E>) -> CachedKeywordExtractionModel<E> {
        CachedKeywordExtractionModel {
            model,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Extracts the `top_n` best keywords of a document, reusing the stored
    /// result when the same document and `top_n` were already extracted.
    ///
    /// # Errors
    ///
    /// Same contract as [`KeywordExtractionModel::extract_keywords`]; errors
    /// are returned to the caller and never cached.
    pub fn extract_keywords(
        &self,
        document: &str,
        top_n: usize,
    ) -> Result<Vec<Keyword>, KeyRankError> {
        let key = (document.to_string(), top_n);
        if let Some(hit) = self.lock_cache().get(&key) {
            return Ok(hit.clone());
        }
        let keywords = self.model.extract_keywords(document, top_n)?;
        self.lock_cache().insert(key, keywords.clone());
        Ok(keywords)
    }

    /// The wrapped model.
    pub fn inner(&self) -> &KeywordExtractionModel<E> {
        &self.model
    }

    /// Drops every memoized result.
    pub fn clear(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<(String, usize), Vec<Keyword>>> {
        // A poisoning panic cannot leave a partial entry, the map stays usable.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

mod cache;
mod pipeline;
mod ranker;
mod scorer;

pub use cache::CachedKeywordExtractionModel;
pub use pipeline::{KeywordExtractionConfig, KeywordExtractionModel, KeywordExtractionOptions};
pub use ranker::{Keyword, KeywordRanker};
pub use scorer::KeywordScorerType;

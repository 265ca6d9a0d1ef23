#[macro_use]
extern crate criterion;

use criterion::Criterion;
use keyrank::embeddings::HashingEmbedder;
use keyrank::{CachedKeywordExtractionModel, KeywordExtractionConfig, KeywordExtractionModel};
use std::time::{Duration, Instant};

static TOP_N: usize = 5;

static SENTENCES: [&str; 8] = [
    "Deep learning models require large labeled datasets for training.",
    "Sparse retrieval pipelines rank candidate passages by lexical overlap.",
    "Neural encoders map documents and queries into a shared vector space.",
    "Careful evaluation protocols reveal systematic annotation errors.",
    "Distributed training jobs saturate the available network bandwidth.",
    "Compact distilled models approximate much larger networks at a fraction of the cost.",
    "Robust tokenization handles noisy user input from web crawls.",
    "Efficient caching layers absorb repeated extraction requests.",
];

fn create_model() -> KeywordExtractionModel<HashingEmbedder> {
    KeywordExtractionModel::new(KeywordExtractionConfig::default()).unwrap()
}

fn corpus() -> Vec<String> {
    (0..64)
        .map(|index| {
            let mut document = String::new();
            for offset in 0..6 {
                document.push_str(SENTENCES[(index + offset) % SENTENCES.len()]);
                document.push(' ');
            }
            document
        })
        .collect()
}

fn extraction_forward_pass(
    iters: u64,
    model: &KeywordExtractionModel<HashingEmbedder>,
    documents: &[String],
) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        for document in documents {
            let _ = model.extract_keywords(document, TOP_N).unwrap();
        }
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn memoized_extraction_pass(
    iters: u64,
    model: &CachedKeywordExtractionModel<HashingEmbedder>,
    documents: &[String],
) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        for document in documents {
            let _ = model.extract_keywords(document, TOP_N).unwrap();
        }
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn bench_keyword_extraction(c: &mut Criterion) {
    let model = create_model();
    let documents = corpus();

    c.bench_function("Keyword extraction forward pass", |b| {
        b.iter_custom(|iters| extraction_forward_pass(iters, &model, &documents))
    });

    let cached = CachedKeywordExtractionModel::new(create_model());
    for document in &documents {
        let _ = cached.extract_keywords(document, TOP_N).unwrap();
    }
    c.bench_function("Memoized keyword extraction", |b| {
        b.iter_custom(|iters| memoized_extraction_pass(iters, &cached, &documents))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_keyword_extraction
}

criterion_main!(benches);

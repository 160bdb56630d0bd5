use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use std::fmt::Write as _;
use std::hint::black_box;
use std::time::Duration;

use wordspace::builder::SimilarityGraphBuilder;
use wordspace::core::EmbeddingStore;

/// Generate a synthetic line-oriented embedding source with some cluster
/// structure so thresholding produces a non-trivial edge set.
fn generate_corpus(n_words: usize, n_dims: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for i in 0..n_words {
        let base = (i % 10) as f64 * 0.1;
        write!(out, "word{:05}", i).unwrap();
        for j in 0..n_dims {
            let noise: f64 = rng.random_range(-0.1..0.1);
            let value = (base + (j as f64 * 0.01) + noise).abs();
            write!(out, " {:.6}", value).unwrap();
        }
        out.push('\n');
    }
    out
}

fn load_store(n_words: usize, n_dims: usize) -> EmbeddingStore {
    EmbeddingStore::from_reader(generate_corpus(n_words, n_dims, 42).as_bytes()).unwrap()
}

pub fn knn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbors");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    for &n_words in &[1_000usize, 5_000, 20_000] {
        let store = load_store(n_words, 50);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_words),
            &store,
            |b, store| {
                b.iter(|| black_box(store.nearest_neighbors(black_box("word00000"), 10)))
            },
        );
    }
    group.finish();
}

pub fn graph_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_graph_build");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    let store = load_store(2_000, 50);

    for &vocab_size in &[100usize, 300, 600] {
        let vocabulary: Vec<String> =
            (0..vocab_size).map(|i| format!("word{:05}", i)).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(vocab_size),
            &vocabulary,
            |b, vocabulary| {
                b.iter(|| {
                    let graph = SimilarityGraphBuilder::new()
                        .with_threshold(0.7)
                        .build(black_box(vocabulary.clone()), &store);
                    black_box(graph)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, knn_benchmark, graph_build_benchmark);
criterion_main!(benches);

//! Shared fixtures: a tiny GloVe-style corpus and seeded synthetic sources.

use std::collections::HashMap;
use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::EmbeddingStore;

/// Fixed seed for deterministic synthetic corpora.
pub const TEST_SEED: u64 = 128;

pub const TINY_CORPUS: &str = "\
cat 1.0 0.0
dog 0.9 0.1
fish 0.0 1.0
";

pub fn tiny_store() -> EmbeddingStore {
    EmbeddingStore::from_reader(TINY_CORPUS.as_bytes()).unwrap()
}

/// Three-word fixture: a and b colinear, c orthogonal to both.
pub fn abc_lookup() -> HashMap<String, Vec<f64>> {
    HashMap::from([
        ("a".to_string(), vec![1.0, 0.0]),
        ("b".to_string(), vec![1.0, 0.0]),
        ("c".to_string(), vec![0.0, 1.0]),
    ])
}

pub fn abc_vocabulary() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

/// Generates a `word v1 .. vD` source with `n_words` entries, components in
/// [-1, 1). Deterministic for a fixed seed.
pub fn synthetic_corpus(n_words: usize, dim: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for i in 0..n_words {
        write!(out, "word{:04}", i).unwrap();
        for _ in 0..dim {
            let v: f64 = rng.random_range(-1.0..1.0);
            write!(out, " {:.6}", v).unwrap();
        }
        out.push('\n');
    }
    out
}

pub fn synthetic_store(n_words: usize, dim: usize, seed: u64) -> EmbeddingStore {
    EmbeddingStore::from_reader(synthetic_corpus(n_words, dim, seed).as_bytes()).unwrap()
}

//! Query facade consumed by the surrounding request-handling layer.
//!
//! [`EmbeddingService`] is the narrow contract the engine exposes: batch
//! embedding lookup, most-similar-words retrieval, and per-request similarity
//! graphs. It holds a shared handle to an already-loaded [`EmbeddingStore`] —
//! the store is constructed once at process start and injected here, so there
//! is no ambient global state and no query can observe a half-loaded store.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::builder::SimilarityGraphBuilder;
use crate::core::EmbeddingStore;
use crate::graph::SimilarityGraph;

/// Result count used when a similar-words query does not say how many.
pub const DEFAULT_SIMILAR_WORDS: usize = 10;

/// Read-only query surface over a shared embedding store.
#[derive(Clone)]
pub struct EmbeddingService {
    store: Arc<EmbeddingStore>,
}

impl EmbeddingService {
    pub fn new(store: Arc<EmbeddingStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    /// Resolves a batch of words to their vectors.
    ///
    /// The result is keyed by the requested spelling and contains only the
    /// words actually found; missing words are omitted, not errors.
    pub fn embeddings_for<S: AsRef<str>>(&self, words: &[S]) -> HashMap<String, Vec<f64>> {
        let mut found = HashMap::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            if let Some(vector) = self.store.get(word) {
                found.insert(word.to_string(), vector.to_vec());
            }
        }
        debug!("embeddings_for: {} of {} words found", found.len(), words.len());
        found
    }

    /// The `n` words most similar to `word`, best first. An unknown word
    /// yields an empty list.
    pub fn similar_words(&self, word: &str, n: usize) -> Vec<String> {
        self.store
            .nearest_neighbors(word, n)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Builds a fresh similarity graph over `vocabulary` at `threshold`.
    pub fn similarity_graph(&self, vocabulary: Vec<String>, threshold: f64) -> SimilarityGraph {
        SimilarityGraphBuilder::new()
            .with_threshold(threshold)
            .build(vocabulary, self.store.as_ref())
    }
}

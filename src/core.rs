//! EmbeddingStore: word→vector data with brute-force cosine k-NN.
//!
//! The store is built once from a line-oriented text source and is immutable
//! afterwards; every query path only reads. This keeps it safely shareable
//! across concurrent readers without locking (wrap it in `Arc` and clone the
//! handle).
//!
//! Words are case-normalized to lowercase at insert and at lookup. Insertion
//! order is preserved and is the documented tie-break order when two entries
//! score the same similarity.
//!
//! # Examples
//!
//! ```
//! use wordspace::core::EmbeddingStore;
//!
//! let source = "cat 1.0 0.0\ndog 0.9 0.1\n";
//! let store = EmbeddingStore::from_reader(source.as_bytes()).unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.dim(), 2);
//! assert!(store.get("CAT").is_some());
//! assert!(store.get("fish").is_none());
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::LoadError;
use crate::operators::cosine_similarity;

/// A neighbor returned by [`EmbeddingStore::nearest_neighbors`]: the matched
/// word and the cosine similarity that ranked it.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarWord {
    pub word: String,
    pub similarity: f64,
}

/// Resolves a word to its vector, if any.
///
/// This is the seam between the store and the graph builder: the builder only
/// needs this capability, so it can be exercised against a plain map in tests.
pub trait VectorLookup {
    fn vector(&self, word: &str) -> Option<&[f64]>;
}

/// Immutable word→vector store with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    // Insertion-order slots; `index` maps the normalized word to its slot.
    words: Vec<String>,
    vectors: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    dim: usize,
}

impl EmbeddingStore {
    /// Loads a store from a file at `path`.
    ///
    /// See [`EmbeddingStore::from_reader`] for the source format and failure
    /// modes; an unreadable file surfaces as [`LoadError::Io`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        debug!("loading embeddings from {}", path.as_ref().display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a store from a line-oriented reader.
    ///
    /// Each line is `word v1 v2 ... vD`, whitespace-separated. The first entry
    /// fixes the dimensionality D; any later line with a different component
    /// count is a fatal [`LoadError::DimensionMismatch`]. A component that is
    /// not a valid number is a fatal [`LoadError::InvalidComponent`]. Blank
    /// lines are skipped. A repeated word overwrites its vector but keeps its
    /// original slot. A source with no entries yields [`LoadError::Empty`] —
    /// the caller never receives an empty-but-ready store.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut words: Vec<String> = Vec::new();
        let mut vectors: Vec<Vec<f64>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut dim = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = line_no + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            // A non-blank line always has a first token.
            let word = tokens.next().unwrap().to_lowercase();

            let mut components = Vec::with_capacity(dim);
            for token in tokens {
                let value: f64 = token.parse().map_err(|_| LoadError::InvalidComponent {
                    line: line_no,
                    token: token.to_string(),
                })?;
                components.push(value);
            }

            if components.is_empty() {
                return Err(LoadError::MissingComponents { line: line_no });
            }
            if vectors.is_empty() {
                dim = components.len();
            } else if components.len() != dim {
                return Err(LoadError::DimensionMismatch {
                    line: line_no,
                    expected: dim,
                    found: components.len(),
                });
            }

            match index.get(&word) {
                Some(&slot) => vectors[slot] = components,
                None => {
                    index.insert(word.clone(), words.len());
                    words.push(word);
                    vectors.push(components);
                }
            }
        }

        if words.is_empty() {
            return Err(LoadError::Empty);
        }

        info!("loaded {} word embeddings ({} dimensions)", words.len(), dim);
        Ok(Self {
            words,
            vectors,
            index,
            dim,
        })
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the store holds no entries. A successfully loaded store is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Embedding dimensionality shared by every stored vector.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Case-insensitive lookup. An unknown word is `None`, never an error.
    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.index
            .get(&word.to_lowercase())
            .map(|&slot| self.vectors[slot].as_slice())
    }

    /// Iterates `(word, vector)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.vectors.iter().map(Vec::as_slice))
    }

    /// Brute-force k-nearest-neighbors by cosine similarity.
    ///
    /// Scans every other entry, ranks by descending similarity, and returns at
    /// most `n` results; the query word itself is never included. A query word
    /// absent from the store yields an empty list — there is nothing to compare
    /// against, which is routine rather than exceptional.
    ///
    /// Equal similarities keep insertion (file) order: the ranking is a stable
    /// sort over insertion-ordered slots.
    pub fn nearest_neighbors(&self, word: &str, n: usize) -> Vec<SimilarWord> {
        let Some(&slot) = self.index.get(&word.to_lowercase()) else {
            debug!("nearest_neighbors: {:?} not in store", word);
            return Vec::new();
        };
        let query = self.vectors[slot].as_slice();

        let mut scored: Vec<(usize, f64)> = (0..self.vectors.len())
            .into_par_iter()
            .filter(|&j| j != slot)
            .map(|j| (j, cosine_similarity(query, &self.vectors[j])))
            .collect();

        // Stable sort: ties resolve to the earlier slot.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(n);

        debug!(
            "nearest_neighbors: {:?} scanned {} entries, returning {}",
            word,
            self.len() - 1,
            scored.len()
        );

        scored
            .into_iter()
            .map(|(j, similarity)| SimilarWord {
                word: self.words[j].clone(),
                similarity,
            })
            .collect()
    }
}

impl VectorLookup for EmbeddingStore {
    fn vector(&self, word: &str) -> Option<&[f64]> {
        self.get(word)
    }
}

/// Plain-map lookup, exact keys. Lets the graph builder run against fixture
/// data without a loaded store.
impl VectorLookup for HashMap<String, Vec<f64>> {
    fn vector(&self, word: &str) -> Option<&[f64]> {
        self.get(word).map(Vec::as_slice)
    }
}

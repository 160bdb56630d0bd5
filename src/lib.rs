//! wordspace — in-memory word-embedding similarity engine.
//!
//! Loads word vectors once from a line-oriented text source, answers
//! case-insensitive lookups and brute-force cosine k-NN queries, and derives
//! threshold similarity graphs with connected-component grouping for
//! downstream visualization.

pub mod builder;
pub mod core;
pub mod error;
pub mod graph;
pub mod grouping;
pub mod operators;
pub mod service;

pub use builder::{SimilarityGraphBuilder, DEFAULT_THRESHOLD};
pub use core::{EmbeddingStore, SimilarWord, VectorLookup};
pub use error::LoadError;
pub use graph::{GraphEdge, GraphNode, SimilarityGraph};
pub use grouping::label_components;
pub use operators::{cosine_similarity, dot, norm};
pub use service::{EmbeddingService, DEFAULT_SIMILAR_WORDS};

#[cfg(test)]
mod tests;

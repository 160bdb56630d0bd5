//! Load-error taxonomy for the embedding store.
//!
//! Loading is all-or-nothing: any error here means no store was constructed.
//! Lookup misses are not errors and are represented as `Option`/empty results
//! at the call sites.

use thiserror::Error;

/// Errors raised while loading a line-oriented embedding source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("cannot read embeddings source: {0}")]
    Io(#[from] std::io::Error),

    /// A line's component count disagrees with the dimensionality fixed by the
    /// first line.
    #[error("line {line}: expected {expected} vector components, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A trailing token failed to parse as a floating-point component.
    #[error("line {line}: invalid vector component {token:?}")]
    InvalidComponent { line: usize, token: String },

    /// A line held a word but no vector components.
    #[error("line {line}: missing vector components")]
    MissingComponents { line: usize },

    /// The source held no entries at all; an empty store is never ready.
    #[error("embeddings source contains no entries")]
    Empty,
}

//! Shared vector primitives for similarity queries and graph construction
//!
//! - Euclidean norm and dot product over `f64` slices
//! - Cosine similarity with the zero-magnitude convention: if either vector
//!   has zero norm the similarity is defined as 0.0 (maximally dissimilar),
//!   never a division fault
//! - Results clamped to [-1, 1] against floating-point drift

/// Computes the Euclidean norm (L2) without allocating.
#[inline]
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// Computes the dot product of two equal-length vectors.
///
/// # Panics
///
/// Panics if the lengths differ. The store's load invariant keeps all resident
/// vectors at one dimensionality, so a mismatch here is a programming error,
/// not a data condition.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "dimension mismatch: {} vs {}",
        a.len(),
        b.len()
    );
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity of two equal-length vectors, clamped to [-1, 1].
///
/// Returns 0.0 when either vector has zero magnitude. This convention feeds
/// both k-NN ranking and graph thresholding: a zero vector sits below any
/// positive threshold and never produces an edge.
///
/// # Panics
///
/// Panics if the lengths differ (see [`dot`]).
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom > 0.0 {
        (dot(a, b) / denom).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

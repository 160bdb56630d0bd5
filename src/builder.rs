//! Threshold-graph construction over a fixed vocabulary.
//!
//! [`SimilarityGraphBuilder`] turns an ordered vocabulary plus a
//! [`VectorLookup`] into a [`SimilarityGraph`]: all-pairs cosine similarity,
//! edges where similarity is strictly above the threshold, node weights from
//! edge counts, and deterministic connected-component groups.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::core::VectorLookup;
use crate::graph::{GraphEdge, GraphNode, SimilarityGraph};
use crate::grouping::label_components;
use crate::operators::cosine_similarity;

/// Threshold applied when none is configured; matches the engine's default
/// query surface.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Per-query graph builder.
///
/// The build is a pure function of (vocabulary order, vectors, threshold):
/// the edge set, node weights, and the exact group-id assignment come out
/// identical across runs. Pair evaluation is parallelized per source node and
/// re-flattened in row order, so parallelism never perturbs the result.
#[derive(Clone, Debug)]
pub struct SimilarityGraphBuilder {
    threshold: f64,
}

impl Default for SimilarityGraphBuilder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SimilarityGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Similarity cutoff for edge creation. An edge is recorded only when the
    /// pair's cosine similarity is *strictly greater* than the threshold;
    /// boundary-equal similarity produces no edge.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        debug!("configuring similarity threshold: {}", threshold);
        self.threshold = threshold;
        self
    }

    /// Builds the graph for `vocabulary`, resolving vectors through `lookup`.
    ///
    /// Node index i corresponds to `vocabulary[i]`; node names keep the
    /// caller's original casing. A word the lookup cannot resolve simply
    /// contributes no edges — the build itself never fails, and a vocabulary
    /// with no resolvable vectors yields N isolated nodes, each its own group.
    pub fn build<L>(self, vocabulary: Vec<String>, lookup: &L) -> SimilarityGraph
    where
        L: VectorLookup + Sync,
    {
        let n = vocabulary.len();
        info!(
            "building similarity graph over {} words (threshold {})",
            n, self.threshold
        );

        let resolved: Vec<Option<&[f64]>> =
            vocabulary.iter().map(|w| lookup.vector(w)).collect();
        let missing = resolved.iter().filter(|v| v.is_none()).count();
        if missing > 0 {
            warn!("{} of {} vocabulary words have no vector", missing, n);
        }

        // All unordered pairs (i, j), i < j. Rows are computed in parallel and
        // flattened in row order, keeping the edge order deterministic.
        let edge_rows: Vec<Vec<GraphEdge>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let Some(a) = resolved[i] else {
                    return Vec::new();
                };
                let mut row = Vec::new();
                for (j, b) in resolved.iter().enumerate().skip(i + 1) {
                    let Some(b) = *b else { continue };
                    let similarity = cosine_similarity(a, b);
                    if similarity > self.threshold {
                        row.push(GraphEdge {
                            source: i,
                            target: j,
                            value: similarity,
                        });
                    }
                }
                row
            })
            .collect();
        let links: Vec<GraphEdge> = edge_rows.into_iter().flatten().collect();

        // Node weight: incident edges + 1, so isolated nodes stay visible.
        let mut degree = vec![0usize; n];
        for edge in &links {
            degree[edge.source] += 1;
            degree[edge.target] += 1;
        }

        let groups = label_components(n, &links);

        let nodes: Vec<GraphNode> = vocabulary
            .into_iter()
            .enumerate()
            .map(|(id, name)| GraphNode {
                id,
                name,
                val: degree[id] + 1,
                group: groups[id],
            })
            .collect();

        let graph = SimilarityGraph { nodes, links };
        debug!(
            "graph built: {} nodes, {} edges, {} groups",
            graph.node_count(),
            graph.edge_count(),
            graph.group_count()
        );
        graph
    }
}

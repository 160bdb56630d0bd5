//! Similarity-graph data model: nodes, weighted undirected edges, groups.
//!
//! A [`SimilarityGraph`] is built fresh per query by the
//! [`crate::builder::SimilarityGraphBuilder`] and carries no state beyond the
//! response that holds it. Node ids are a dense range [0, N) in vocabulary
//! order; edges keep `source < target`, with no duplicates for an unordered
//! pair. The serialized field names (`id`/`name`/`val`/`group`,
//! `source`/`target`/`value`) are the shape the consuming renderer expects.

use std::fmt;

use log::trace;
use serde::Serialize;

/// One vocabulary word in the graph.
///
/// `val` is the node's connectivity weight: incident-edge count + 1, so even an
/// isolated node keeps a positive weight downstream. `group` is the connected
/// component id assigned by [`crate::grouping::label_components`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: usize,
    pub name: String,
    pub val: usize,
    pub group: usize,
}

/// Undirected edge between two node ids, tagged with the cosine similarity
/// that produced it. `source`/`target` are interchangeable endpoints; builders
/// keep `source < target`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

// Approximate equality on the similarity value; exact on endpoints.
impl PartialEq for GraphEdge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.target == other.target
            && approx::relative_eq!(self.value, other.value)
    }
}

/// Ordered nodes plus the thresholded edge set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimilarityGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}

impl SimilarityGraph {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Count of edges incident to node `id`.
    pub fn degree(&self, id: usize) -> usize {
        assert!(
            id < self.nodes.len(),
            "node id {} out of bounds for {} nodes",
            id,
            self.nodes.len()
        );
        self.links
            .iter()
            .filter(|e| e.source == id || e.target == id)
            .count()
    }

    /// Node ids adjacent to `id`, in edge order.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        assert!(
            id < self.nodes.len(),
            "node id {} out of bounds for {} nodes",
            id,
            self.nodes.len()
        );
        trace!("collecting neighbors of node {}", id);
        self.links
            .iter()
            .filter_map(|e| {
                if e.source == id {
                    Some(e.target)
                } else if e.target == id {
                    Some(e.source)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Number of distinct connected-component groups.
    pub fn group_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.group)
            .max()
            .map(|g| g + 1)
            .unwrap_or(0)
    }
}

impl fmt::Display for SimilarityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SimilarityGraph: {} nodes, {} edges, {} groups",
            self.node_count(),
            self.edge_count(),
            self.group_count()
        )?;

        if self.nodes.len() <= 20 {
            for node in &self.nodes {
                writeln!(
                    f,
                    "  [{}] {} (val={}, group={})",
                    node.id, node.name, node.val, node.group
                )?;
            }
            for edge in &self.links {
                writeln!(
                    f,
                    "  {} -- {} ({:.4})",
                    edge.source, edge.target, edge.value
                )?;
            }
        } else {
            // Summary only for large graphs
            let isolated = self.nodes.iter().filter(|n| n.val == 1).count();
            writeln!(f, "  Graph too large to display ({} nodes)", self.nodes.len())?;
            writeln!(f, "  Isolated nodes: {}", isolated)?;
        }

        Ok(())
    }
}

//! Connected-component labeling for similarity graphs.
//!
//! Nodes are visited in ascending index order and each unlabeled node opens
//! the next group id, so for a fixed edge set the exact id assignment is
//! reproducible across runs: group 0 is the component containing the
//! lowest-index node, group 1 the component of the next unlabeled node, and
//! so on.
//!
//! The traversal is an explicit-stack depth-first walk over adjacency lists.
//! Recursion would track component size on the call stack and large
//! vocabularies can chain thousands of nodes deep.

use log::debug;

use crate::graph::GraphEdge;

/// Labels each of `nnodes` nodes with its connected-component group id.
///
/// Edges with out-of-range endpoints are a programming error and panic. The
/// returned vector has length `nnodes`; with no edges every node lands in its
/// own group, ids ascending with node index.
pub fn label_components(nnodes: usize, links: &[GraphEdge]) -> Vec<usize> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nnodes];
    for edge in links {
        assert!(
            edge.source < nnodes && edge.target < nnodes,
            "edge ({}, {}) out of bounds for {} nodes",
            edge.source,
            edge.target,
            nnodes
        );
        adjacency[edge.source].push(edge.target);
        adjacency[edge.target].push(edge.source);
    }

    const UNLABELED: usize = usize::MAX;
    let mut groups = vec![UNLABELED; nnodes];
    let mut next_group = 0usize;
    let mut stack: Vec<usize> = Vec::new();

    for start in 0..nnodes {
        if groups[start] != UNLABELED {
            continue;
        }
        groups[start] = next_group;
        stack.push(start);
        while let Some(node) = stack.pop() {
            for &neighbor in &adjacency[node] {
                if groups[neighbor] == UNLABELED {
                    groups[neighbor] = next_group;
                    stack.push(neighbor);
                }
            }
        }
        next_group += 1;
    }

    debug!(
        "labeled {} nodes into {} groups over {} edges",
        nnodes,
        next_group,
        links.len()
    );
    groups
}

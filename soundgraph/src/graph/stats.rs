//! Derived statistics over a composition graph.

use super::Graph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary statistics handed to the producer-feedback prompt.
///
/// The `BTreeMap` keeps the serialized form deterministic, so the same
/// graph always yields the same prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Total number of nodes.
    pub total_nodes: usize,
    /// Total number of edges.
    pub total_edges: usize,
    /// Node counts keyed by kind tag.
    pub node_types: BTreeMap<&'static str, usize>,
    /// Whether any node carries musical key information.
    pub has_key_info: bool,
    /// Whether any node carries tempo information.
    pub has_bpm_info: bool,
}

impl GraphStats {
    /// Compute statistics for a graph.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        let mut node_types: BTreeMap<&'static str, usize> = BTreeMap::new();
        for node in &graph.nodes {
            *node_types.entry(node.kind.as_str()).or_insert(0) += 1;
        }

        Self {
            total_nodes: graph.nodes.len(),
            total_edges: graph.edges.len(),
            node_types,
            has_key_info: graph
                .nodes
                .iter()
                .any(|node| node.key.as_deref().is_some_and(|key| !key.is_empty())),
            has_bpm_info: graph.nodes.iter().any(|node| node.bpm.is_some()),
        }
    }
}

//! Graph invariant checks.

use std::collections::HashSet;

use crate::error::{GateGraphError, Result};

use super::GateGraph;

/// Validate a gate graph.
///
/// Checks:
/// - No node key is declared twice
/// - No two declarations render under the same id
/// - Every edge endpoint is declared
pub fn validate_graph(graph: &GateGraph) -> Result<()> {
    let mut seen = HashSet::with_capacity(graph.node_count());
    let mut ids = HashSet::with_capacity(graph.node_count());
    for node in graph.nodes() {
        if !seen.insert(&node.key) {
            return Err(GateGraphError::DuplicateNode {
                key: node.key.to_string(),
            });
        }
        let unquoted = node
            .id
            .strip_prefix('"')
            .and_then(|id| id.strip_suffix('"'))
            .unwrap_or(node.id.as_str());
        if !ids.insert(unquoted) {
            return Err(GateGraphError::DuplicateNode {
                key: node.id.clone(),
            });
        }
    }

    for edge in graph.edges() {
        for end in [&edge.from, &edge.to] {
            if !seen.contains(end) {
                return Err(GateGraphError::dangling(&edge.from, &edge.to, end));
            }
        }
    }

    Ok(())
}

//! Dependency closure: `dependency` and `imports` edges, unbounded depth.

use crate::graph::RelationshipGraph;

use super::{breadth_first, ReachedProject, TraversalConfig};

/// Walk the transitive dependency closure of `anchor`.
pub fn trace(
    graph: &RelationshipGraph,
    anchor: &str,
    config: &TraversalConfig,
) -> Vec<ReachedProject> {
    let nodes = breadth_first(graph, anchor, config);
    tracing::trace!(anchor, reached = nodes.len(), "dependency closure");
    nodes
}

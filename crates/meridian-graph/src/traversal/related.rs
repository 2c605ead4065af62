//! Related projects: any relationship type, hop-bounded.

use crate::graph::RelationshipGraph;

use super::{breadth_first, ReachedProject, TraversalConfig};

/// Trace outgoing relationships from `anchor` up to `config.max_hops`.
pub fn trace(
    graph: &RelationshipGraph,
    anchor: &str,
    config: &TraversalConfig,
) -> Vec<ReachedProject> {
    let nodes = breadth_first(graph, anchor, config);
    tracing::trace!(anchor, max_hops = ?config.max_hops, reached = nodes.len(), "related projects");
    nodes
}

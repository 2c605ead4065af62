//! Bounded breadth-first traversals over the relationship graph.

pub mod closure;
pub mod related;

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use petgraph::visit::EdgeRef;

use crate::graph::{EdgeWeight, RelationshipGraph};

/// Which edges a traversal may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFilter {
    /// Every relationship type.
    Any,
    /// Only `dependency` and `imports` edges.
    DependencyOnly,
}

impl EdgeFilter {
    fn accepts(&self, edge: &EdgeWeight) -> bool {
        match self {
            Self::Any => true,
            Self::DependencyOnly => edge.relationship_type.is_dependency_edge(),
        }
    }
}

/// Configuration for traversal operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum hops from the anchor. `None` walks the full closure.
    pub max_hops: Option<usize>,
    pub edges: EdgeFilter,
}

impl TraversalConfig {
    pub fn related(max_hops: usize) -> Self {
        Self {
            max_hops: Some(max_hops),
            edges: EdgeFilter::Any,
        }
    }

    pub fn dependencies() -> Self {
        Self {
            max_hops: None,
            edges: EdgeFilter::DependencyOnly,
        }
    }
}

/// A project reached by a traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachedProject {
    pub project_id: String,
    /// Minimal number of hops from the anchor.
    pub hops: usize,
    /// Strongest product of edge weights over the minimal-hop paths.
    pub weight: f64,
}

/// Level-order BFS shared by all traversals.
///
/// A node is enqueued at most once. Because the queue is FIFO, every node of
/// level `d` has received all its candidate weights from level `d - 1`
/// before any of them is expanded, so the max-over-minimal-paths weight is
/// final when it propagates.
pub(crate) fn breadth_first(
    graph: &RelationshipGraph,
    anchor: &str,
    config: &TraversalConfig,
) -> Vec<ReachedProject> {
    let Some(start) = graph.get_node(anchor) else {
        return Vec::new();
    };

    // node → (hops, weight)
    let mut reached = HashMap::new();
    reached.insert(start, (0_usize, 1.0_f64));

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let (depth, path_weight) = reached[&current];
        if config.max_hops.is_some_and(|max| depth >= max) {
            continue;
        }

        for edge in graph.graph.edges(current) {
            if !config.edges.accepts(edge.weight()) {
                continue;
            }
            let neighbor = edge.target();
            let candidate = path_weight * edge.weight().weight;

            match reached.entry(neighbor) {
                Entry::Vacant(slot) => {
                    slot.insert((depth + 1, candidate));
                    queue.push_back(neighbor);
                }
                Entry::Occupied(mut slot) => {
                    let (hops, weight) = slot.get_mut();
                    if *hops == depth + 1 {
                        *weight = weight.max(candidate);
                    }
                }
            }
        }
    }

    let mut nodes: Vec<ReachedProject> = reached
        .into_iter()
        .filter(|(idx, _)| *idx != start)
        .map(|(idx, (hops, weight))| ReachedProject {
            project_id: graph.graph[idx].project_id.clone(),
            hops,
            weight,
        })
        .collect();
    nodes.sort_by(|a, b| a.hops.cmp(&b.hops).then_with(|| a.project_id.cmp(&b.project_id)));
    nodes
}

//! petgraph::DiGraph wrapper with ProjectNode and EdgeWeight types.

use std::collections::HashMap;

use meridian_core::models::RelationshipType;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::model::WorkspaceModel;
use crate::traversal::{self, ReachedProject, TraversalConfig};

/// A node in the relationship graph, representing a project.
#[derive(Debug, Clone)]
pub struct ProjectNode {
    pub project_id: String,
}

/// Weight on a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeWeight {
    pub relationship_type: RelationshipType,
    /// Affinity in [0, 1].
    pub weight: f64,
    /// True when the edge comes from a project's `dependencies` list rather
    /// than a declared relationship.
    pub implicit: bool,
}

/// An outgoing edge, resolved to the target's project id.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEdge {
    pub to: String,
    pub relationship_type: RelationshipType,
    pub weight: f64,
    /// Derived from the source project's `dependencies` list.
    pub implicit: bool,
}

/// Directed multigraph of project relationships.
///
/// Parallel edges between the same ordered pair are kept as independent
/// edges. Immutable once built.
#[derive(Debug, Clone)]
pub struct RelationshipGraph {
    pub(crate) graph: DiGraph<ProjectNode, EdgeWeight>,
    /// Map from project_id → NodeIndex for O(1) lookup.
    pub(crate) node_index: HashMap<String, NodeIndex>,
}

impl RelationshipGraph {
    /// Build the graph from a validated model.
    ///
    /// Every project becomes a node. Each declared relationship becomes an
    /// edge; each `dependencies` entry becomes an implicit `dependency` edge.
    pub fn build(model: &WorkspaceModel) -> Self {
        let mut graph = DiGraph::with_capacity(model.len(), model.relationships().len());
        let mut node_index = HashMap::with_capacity(model.len());

        for id in model.project_ids() {
            let idx = graph.add_node(ProjectNode {
                project_id: id.clone(),
            });
            node_index.insert(id.clone(), idx);
        }

        for project in model.projects() {
            let Some(&from) = node_index.get(&project.id) else {
                continue;
            };
            for dep in &project.dependencies {
                if let Some(&to) = node_index.get(dep) {
                    graph.add_edge(
                        from,
                        to,
                        EdgeWeight {
                            relationship_type: RelationshipType::Dependency,
                            weight: RelationshipType::Dependency.default_weight(),
                            implicit: true,
                        },
                    );
                }
            }
        }

        for rel in model.relationships() {
            if let (Some(&from), Some(&to)) = (node_index.get(&rel.from), node_index.get(&rel.to))
            {
                graph.add_edge(
                    from,
                    to,
                    EdgeWeight {
                        relationship_type: rel.relationship_type,
                        weight: rel.effective_weight(),
                        implicit: false,
                    },
                );
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "relationship graph built"
        );

        Self { graph, node_index }
    }

    /// Look up a node index by project id.
    pub fn get_node(&self, project_id: &str) -> Option<NodeIndex> {
        self.node_index.get(project_id).copied()
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.node_index.contains_key(project_id)
    }

    /// Number of nodes.
    pub fn project_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, implicit dependency edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All outgoing edges of a project, sorted by target then type.
    pub fn outgoing(&self, project_id: &str) -> Vec<OutgoingEdge> {
        let Some(idx) = self.get_node(project_id) else {
            return Vec::new();
        };
        let mut edges: Vec<OutgoingEdge> = self
            .graph
            .edges(idx)
            .map(|edge| OutgoingEdge {
                to: self.graph[edge.target()].project_id.clone(),
                relationship_type: edge.weight().relationship_type,
                weight: edge.weight().weight,
                implicit: edge.weight().implicit,
            })
            .collect();
        edges.sort_by(|a, b| {
            a.to.cmp(&b.to)
                .then(a.relationship_type.cmp(&b.relationship_type))
                .then(b.weight.total_cmp(&a.weight))
        });
        edges
    }

    /// Projects reachable from `anchor` over any edge type within `max_hops`.
    ///
    /// Each is annotated with its minimal hop count and the strongest path
    /// weight among the minimal-hop paths. The anchor itself is excluded.
    pub fn related_projects(&self, anchor: &str, max_hops: usize) -> Vec<ReachedProject> {
        traversal::related::trace(self, anchor, &TraversalConfig::related(max_hops))
    }

    /// Transitive closure of `anchor` over `dependency` and `imports` edges.
    pub fn dependency_closure(&self, anchor: &str) -> Vec<ReachedProject> {
        traversal::closure::trace(self, anchor, &TraversalConfig::dependencies())
    }
}

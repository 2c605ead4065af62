//! # meridian-graph
//!
//! The workspace snapshot's structure: a validated, immutable
//! [`WorkspaceModel`] and the directed [`RelationshipGraph`] built from it.
//! Traversals are breadth-first with a visited set, so cyclic workspaces
//! terminate in `O(V + E)`.

pub mod graph;
pub mod model;
pub mod traversal;

pub use graph::RelationshipGraph;
pub use model::WorkspaceModel;
pub use traversal::{ReachedProject, TraversalConfig};

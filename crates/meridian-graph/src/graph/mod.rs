//! Relationship graph over the workspace's projects.

pub mod relationship_graph;

pub use relationship_graph::{EdgeWeight, OutgoingEdge, ProjectNode, RelationshipGraph};

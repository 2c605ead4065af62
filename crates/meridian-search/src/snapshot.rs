//! Immutable point-in-time build of the workspace.

use meridian_core::config::WorkspaceConfig;
use meridian_core::errors::ConfigError;
use meridian_graph::{RelationshipGraph, WorkspaceModel};

/// A workspace model and the relationship graph built from it.
///
/// Never mutated; a configuration reload produces a fresh snapshot.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    pub model: WorkspaceModel,
    pub graph: RelationshipGraph,
}

impl WorkspaceSnapshot {
    pub fn build(config: WorkspaceConfig) -> Result<Self, ConfigError> {
        let model = WorkspaceModel::from_config(config)?;
        let graph = RelationshipGraph::build(&model);
        Ok(Self { model, graph })
    }
}

//! ScopeResolver: which projects a query may draw hits from, and how each
//! relates to the anchor.

use std::collections::BTreeMap;

use meridian_core::constants::NEUTRAL_WEIGHT;
use meridian_core::errors::ScopeError;
use meridian_core::models::{RelationKind, SearchScope};
use meridian_graph::{ReachedProject, RelationshipGraph, WorkspaceModel};
use tracing::debug;

/// Hop limit used to credit relationships under the `workspace` scope.
const WORKSPACE_RELATED_HOPS: usize = 1;

/// A project eligible for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleProject {
    pub project_id: String,
    pub relation_kind: RelationKind,
    /// Path affinity from the anchor in [0, 1]; 1.0 for self and unrelated.
    pub edge_weight: f64,
}

/// The resolved set of eligible projects, keyed by project id.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleSet {
    scope: SearchScope,
    anchor: Option<String>,
    projects: BTreeMap<String, EligibleProject>,
}

impl EligibleSet {
    pub fn new(scope: SearchScope, anchor: Option<String>) -> Self {
        Self {
            scope,
            anchor,
            projects: BTreeMap::new(),
        }
    }

    /// Add a project. An existing entry is kept if it is at least as close
    /// to the anchor.
    pub fn insert(&mut self, project: EligibleProject) {
        match self.projects.get(&project.project_id) {
            Some(existing) if existing.relation_kind <= project.relation_kind => {}
            _ => {
                self.projects.insert(project.project_id.clone(), project);
            }
        }
    }

    pub fn get(&self, project_id: &str) -> Option<&EligibleProject> {
        self.projects.get(project_id)
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.projects.contains_key(project_id)
    }

    /// Eligible projects in project id order.
    pub fn iter(&self) -> impl Iterator<Item = &EligibleProject> {
        self.projects.values()
    }

    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

/// Resolves a (scope, anchor) pair against one snapshot.
pub struct ScopeResolver<'a> {
    model: &'a WorkspaceModel,
    graph: &'a RelationshipGraph,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(model: &'a WorkspaceModel, graph: &'a RelationshipGraph) -> Self {
        Self { model, graph }
    }

    /// Resolve the eligible projects. `scope` falls back to the workspace's
    /// `default_scope`.
    ///
    /// Fails before any I/O when the scope needs an anchor and none is given,
    /// or when the anchor is not a project of this workspace.
    pub fn resolve(
        &self,
        anchor: Option<&str>,
        scope: Option<SearchScope>,
    ) -> Result<EligibleSet, ScopeError> {
        let search = self.model.search_config();
        let scope = scope.unwrap_or(search.default_scope);

        if let Some(anchor) = anchor {
            if !self.model.contains(anchor) {
                return Err(ScopeError::UnknownAnchor {
                    anchor: anchor.to_string(),
                });
            }
        }

        let mut set = EligibleSet::new(scope, anchor.map(str::to_string));

        match (scope, anchor) {
            (SearchScope::Workspace, anchor) => {
                for id in self.model.project_ids() {
                    set.insert(unrelated(id));
                }
                if let Some(anchor) = anchor {
                    set.insert(self_project(anchor));
                    for reached in self.graph.related_projects(anchor, WORKSPACE_RELATED_HOPS) {
                        set.insert(reached_as(reached, RelationKind::Related));
                    }
                }
            }
            (scope, None) => return Err(ScopeError::NoAnchor { scope }),
            (SearchScope::Project, Some(anchor)) => {
                set.insert(self_project(anchor));
            }
            (SearchScope::Dependencies, Some(anchor)) => {
                set.insert(self_project(anchor));
                for reached in self.graph.dependency_closure(anchor) {
                    set.insert(reached_as(reached, RelationKind::Dependency));
                }
            }
            (SearchScope::Related, Some(anchor)) => {
                set.insert(self_project(anchor));
                for reached in self.graph.related_projects(anchor, search.related_max_hops) {
                    set.insert(reached_as(reached, RelationKind::Related));
                }
            }
        }

        debug!(
            %scope,
            anchor = anchor.unwrap_or("-"),
            eligible = set.len(),
            "scope resolved"
        );
        Ok(set)
    }
}

fn self_project(id: &str) -> EligibleProject {
    EligibleProject {
        project_id: id.to_string(),
        relation_kind: RelationKind::SelfProject,
        edge_weight: NEUTRAL_WEIGHT,
    }
}

fn unrelated(id: &str) -> EligibleProject {
    EligibleProject {
        project_id: id.to_string(),
        relation_kind: RelationKind::Unrelated,
        edge_weight: NEUTRAL_WEIGHT,
    }
}

fn reached_as(reached: ReachedProject, relation_kind: RelationKind) -> EligibleProject {
    EligibleProject {
        project_id: reached.project_id,
        relation_kind,
        edge_weight: reached.weight,
    }
}

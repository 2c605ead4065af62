//! WorkspaceModel: validated, immutable snapshot of projects and relationships.

use std::collections::HashMap;

use meridian_core::config::{AggregationConfig, SearchConfig, WorkspaceConfig};
use meridian_core::errors::ConfigError;
use meridian_core::models::{Project, Relationship};
use tracing::debug;

/// Read-only view of one workspace configuration.
///
/// Built once per configuration load; a reload builds a new model.
#[derive(Debug, Clone)]
pub struct WorkspaceModel {
    name: String,
    version: String,
    /// Project ids in declaration order.
    project_ids: Vec<String>,
    projects: HashMap<String, Project>,
    relationships: Vec<Relationship>,
    excludes: HashMap<String, Vec<glob::Pattern>>,
    search: SearchConfig,
    aggregation: AggregationConfig,
}

impl WorkspaceModel {
    /// Build a model, rejecting duplicate ids and references to unknown projects.
    pub fn from_config(config: WorkspaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let WorkspaceConfig {
            name,
            version,
            projects: declared,
            relationships,
            search,
            aggregation,
        } = config;

        let mut project_ids = Vec::with_capacity(declared.len());
        let mut projects = HashMap::with_capacity(declared.len());
        for project in declared {
            if projects.contains_key(&project.id) {
                return Err(ConfigError::DuplicateProjectId { id: project.id });
            }
            project_ids.push(project.id.clone());
            projects.insert(project.id.clone(), project);
        }

        for id in &project_ids {
            let project = &projects[id];
            if let Some(missing) = project
                .dependencies
                .iter()
                .find(|dep| !projects.contains_key(*dep))
            {
                return Err(ConfigError::DanglingReference {
                    owner: format!("project '{id}'"),
                    field: "dependencies".to_string(),
                    missing: missing.clone(),
                });
            }
        }

        for (i, rel) in relationships.iter().enumerate() {
            for (field, endpoint) in [("from", &rel.from), ("to", &rel.to)] {
                if !projects.contains_key(endpoint) {
                    return Err(ConfigError::DanglingReference {
                        owner: format!("relationships[{i}]"),
                        field: field.to_string(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        let mut excludes = HashMap::new();
        for (id, project) in &projects {
            let patterns = project
                .indexing
                .exclude
                .iter()
                .map(|p| {
                    glob::Pattern::new(p).map_err(|e| ConfigError::ValidationFailed {
                        field: format!("projects.{id}.indexing.exclude"),
                        message: format!("invalid glob '{p}': {e}"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if !patterns.is_empty() {
                excludes.insert(id.clone(), patterns);
            }
        }

        debug!(
            workspace = %name,
            projects = project_ids.len(),
            relationships = relationships.len(),
            "workspace model built"
        );

        Ok(Self {
            name,
            version,
            project_ids,
            projects,
            relationships,
            excludes,
            search: search.normalized(),
            aggregation,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// O(1) lookup by project id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.projects.contains_key(id)
    }

    /// All project ids, in declaration order.
    pub fn project_ids(&self) -> &[String] {
        &self.project_ids
    }

    /// All projects, in declaration order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.project_ids.iter().filter_map(|id| self.projects.get(id))
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn aggregation_config(&self) -> &AggregationConfig {
        &self.aggregation
    }

    pub fn len(&self) -> usize {
        self.project_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project_ids.is_empty()
    }

    /// Whether `path` matches one of the project's `indexing.exclude` globs.
    pub fn is_excluded(&self, project_id: &str, path: &str) -> bool {
        self.excludes
            .get(project_id)
            .is_some_and(|patterns| patterns.iter().any(|p| p.matches(path)))
    }
}

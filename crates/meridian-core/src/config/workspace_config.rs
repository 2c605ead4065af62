//! Workspace configuration: the validated input a snapshot is built from.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{AggregationConfig, SearchConfig};
use crate::constants::PROJECT_ID_PATTERN;
use crate::errors::ConfigError;
use crate::models::{Project, Relationship, SearchScope};

static PROJECT_ID_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(PROJECT_ID_PATTERN).ok());

/// Top-level workspace configuration.
///
/// Field names follow the workspace JSON schema: `version`, `name`,
/// `projects`, `relationships`, `search`. `aggregation` is optional and
/// tunes the retrieval fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub version: String,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

impl WorkspaceConfig {
    pub fn new(name: impl Into<String>, projects: Vec<Project>) -> Self {
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            projects,
            relationships: Vec::new(),
            search: SearchConfig::default(),
            aggregation: AggregationConfig::default(),
        }
    }

    pub fn with_relationships(mut self, relationships: Vec<Relationship>) -> Self {
        self.relationships = relationships;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationConfig) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Load a workspace file.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`MERIDIAN_*`)
    /// 2. The workspace file (`.toml` parsed as TOML, anything else as JSON)
    /// 3. Compiled defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let mut config: WorkspaceConfig = if is_toml {
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };

        Self::apply_env_overrides(&mut config);
        config.finish()
    }

    /// Parse a JSON workspace document (no environment overrides).
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorkspaceConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.finish()
    }

    /// Parse a TOML workspace document (no environment overrides).
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: WorkspaceConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.finish()
    }

    /// Serialize the config back to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Clamp soft settings, then validate hard ones.
    fn finish(mut self) -> Result<Self, ConfigError> {
        self.search = self.search.normalized();
        self.validate()?;
        Ok(self)
    }

    /// Validate field-level constraints.
    ///
    /// Cross-references (duplicate ids, dangling dependencies) are checked
    /// when the workspace model is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.projects.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "projects".to_string(),
                message: "a workspace needs at least one project".to_string(),
            });
        }

        for project in &self.projects {
            if !is_valid_project_id(&project.id) {
                return Err(ConfigError::InvalidProjectId {
                    id: project.id.clone(),
                });
            }
            for pattern in &project.indexing.exclude {
                if let Err(e) = glob::Pattern::new(pattern) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("projects.{}.indexing.exclude", project.id),
                        message: format!("invalid glob '{pattern}': {e}"),
                    });
                }
            }
        }

        for (i, rel) in self.relationships.iter().enumerate() {
            if let Some(weight) = rel.weight {
                if !weight.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("relationships[{i}].weight"),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `MERIDIAN_SEARCH_RELATIONSHIP_BOOST`,
    /// `MERIDIAN_AGGREGATION_QUERY_DEADLINE_MS`, etc.
    fn apply_env_overrides(config: &mut WorkspaceConfig) {
        if let Ok(val) = std::env::var("MERIDIAN_SEARCH_DEFAULT_SCOPE") {
            if let Ok(v) = val.parse::<SearchScope>() {
                config.search.default_scope = v;
                debug!(
                    field = "search.default_scope",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_SEARCH_CROSS_PROJECT_RANKING") {
            if let Ok(v) = val.parse::<bool>() {
                config.search.cross_project_ranking = v;
                debug!(
                    field = "search.cross_project_ranking",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_SEARCH_RELATIONSHIP_BOOST") {
            if let Ok(v) = val.parse::<f64>() {
                config.search.relationship_boost = v;
                debug!(
                    field = "search.relationship_boost",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_SEARCH_RELATED_MAX_HOPS") {
            if let Ok(v) = val.parse::<usize>() {
                config.search.related_max_hops = v;
                debug!(
                    field = "search.related_max_hops",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_AGGREGATION_PER_PROJECT_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.aggregation.per_project_timeout_ms = v;
                debug!(
                    field = "aggregation.per_project_timeout_ms",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_AGGREGATION_QUERY_DEADLINE_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.aggregation.query_deadline_ms = v;
                debug!(
                    field = "aggregation.query_deadline_ms",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_AGGREGATION_CANCELLATION_GRACE_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.aggregation.cancellation_grace_ms = v;
                debug!(
                    field = "aggregation.cancellation_grace_ms",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
        if let Ok(val) = std::env::var("MERIDIAN_AGGREGATION_MAX_CONCURRENT") {
            if let Ok(v) = val.parse::<usize>() {
                config.aggregation.max_concurrent_retrievals = v;
                debug!(
                    field = "aggregation.max_concurrent_retrievals",
                    value = %val,
                    "environment override applied"
                );
            } else {
                warn!(value = %val, "ignoring unparseable environment override");
            }
        }
    }
}

/// Whether `id` matches `[a-zA-Z0-9_]+`.
pub fn is_valid_project_id(id: &str) -> bool {
    match PROJECT_ID_RE.as_ref() {
        Some(re) => re.is_match(id),
        None => false,
    }
}

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_PROJECT_TYPE;

/// Indexing priority of a project. Also the order in which projects are
/// dispatched to the retrieval collaborator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndexingPriority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

/// Per-project indexing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingConfig {
    /// Whether the project has an index to query. Default: true.
    pub enabled: bool,
    /// Dispatch priority. Default: medium.
    pub priority: IndexingPriority,
    /// Glob patterns of paths that must never surface in results.
    pub exclude: Vec<String>,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: IndexingPriority::Medium,
            exclude: Vec::new(),
        }
    }
}

/// A project registered in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique id, `[a-zA-Z0-9_]+`.
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type", default = "default_project_type")]
    pub project_type: String,
    #[serde(
        default,
        alias = "language",
        deserialize_with = "deserialize_languages"
    )]
    pub languages: Vec<String>,
    /// Ids of projects this project depends on.
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    #[serde(default)]
    pub indexing: IndexingConfig,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            project_type: default_project_type(),
            languages: Vec::new(),
            dependencies: BTreeSet::new(),
            indexing: IndexingConfig::default(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_indexing(mut self, indexing: IndexingConfig) -> Self {
        self.indexing = indexing;
        self
    }
}

fn default_project_type() -> String {
    DEFAULT_PROJECT_TYPE.to_string()
}

/// Accepts `"rust"` as well as `["rust", "typescript"]`.
fn deserialize_languages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(lang) => vec![lang],
        OneOrMany::Many(langs) => langs,
    })
}

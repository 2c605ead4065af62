use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// The six declared relationship types between projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Imports,
    ApiClient,
    SharedDatabase,
    EventDriven,
    SemanticSimilarity,
    Dependency,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 6] = [
        Self::Imports,
        Self::ApiClient,
        Self::SharedDatabase,
        Self::EventDriven,
        Self::SemanticSimilarity,
        Self::Dependency,
    ];

    /// Prior affinity of this edge type, used when a relationship declares no weight.
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::Dependency => constants::WEIGHT_DEPENDENCY,
            Self::Imports => constants::WEIGHT_IMPORTS,
            Self::SemanticSimilarity => constants::WEIGHT_SEMANTIC_SIMILARITY,
            Self::ApiClient => constants::WEIGHT_API_CLIENT,
            Self::EventDriven => constants::WEIGHT_EVENT_DRIVEN,
            Self::SharedDatabase => constants::WEIGHT_SHARED_DATABASE,
        }
    }

    /// Edge types followed by the dependency closure.
    pub fn is_dependency_edge(&self) -> bool {
        matches!(self, Self::Dependency | Self::Imports)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Imports => "imports",
            Self::ApiClient => "api_client",
            Self::SharedDatabase => "shared_database",
            Self::EventDriven => "event_driven",
            Self::SemanticSimilarity => "semantic_similarity",
            Self::Dependency => "dependency",
        }
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge between two projects.
///
/// Several relationships may connect the same ordered pair; each is an
/// independent edge. `metadata` is carried through untouched and never
/// takes part in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Declared affinity in [0, 1]. Falls back to the type prior when absent.
    #[serde(default, alias = "boost", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Relationship {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relationship_type,
            description: None,
            metadata: BTreeMap::new(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Affinity used for scoring, clamped to [0, 1].
    pub fn effective_weight(&self) -> f64 {
        self.weight
            .unwrap_or_else(|| self.relationship_type.default_weight())
            .clamp(0.0, 1.0)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which projects a query may draw results from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// The anchor project only.
    Project,
    /// The anchor plus its transitive dependency/imports closure.
    Dependencies,
    /// Every project in the workspace.
    #[default]
    Workspace,
    /// The anchor plus projects reachable over any relationship.
    Related,
}

impl SearchScope {
    pub const ALL: [SearchScope; 4] = [
        Self::Project,
        Self::Dependencies,
        Self::Workspace,
        Self::Related,
    ];

    pub fn requires_anchor(&self) -> bool {
        !matches!(self, Self::Workspace)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Dependencies => "dependencies",
            Self::Workspace => "workspace",
            Self::Related => "related",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| format!("unknown search scope: {s}"))
    }
}

/// How a result's project relates to the anchor.
///
/// Variant order is tie-break priority: closer to the anchor sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    #[serde(rename = "self")]
    SelfProject,
    #[serde(rename = "dependency")]
    Dependency,
    #[serde(rename = "related")]
    Related,
    #[serde(rename = "unrelated-but-in-workspace")]
    Unrelated,
}

impl RelationKind {
    /// Tie-break rank, 0 = highest priority.
    pub fn priority(&self) -> u8 {
        match self {
            Self::SelfProject => 0,
            Self::Dependency => 1,
            Self::Related => 2,
            Self::Unrelated => 3,
        }
    }

    /// Whether hits of this kind are eligible for a relationship boost.
    pub fn is_boostable(&self) -> bool {
        matches!(self, Self::Dependency | Self::Related)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfProject => "self",
            Self::Dependency => "dependency",
            Self::Related => "related",
            Self::Unrelated => "unrelated-but-in-workspace",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

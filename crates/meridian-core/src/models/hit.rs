use std::fmt;

use serde::{Deserialize, Serialize};

use super::scope::{RelationKind, SearchScope};

/// A scored hit produced by the retrieval collaborator for one project.
///
/// `base_score` is on the collaborator's own scale and is not assumed to be
/// comparable across projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    pub project_id: String,
    /// Unique within its project.
    pub document_id: String,
    pub base_score: f64,
    /// Project-relative path of the hit, when the collaborator knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Opaque passthrough (snippet, location, ...).
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl RawHit {
    pub fn new(
        project_id: impl Into<String>,
        document_id: impl Into<String>,
        base_score: f64,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            document_id: document_id.into(),
            base_score,
            path: None,
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

/// One entry of the globally ranked output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub project_id: String,
    pub document_id: String,
    pub final_score: f64,
    /// Relation weight actually multiplied into `final_score`.
    pub boost_applied: f64,
    pub relation_kind: RelationKind,
    /// 1-based position in the full ranked sequence.
    pub rank: usize,
    pub payload: serde_json::Value,
}

/// Why a project contributed no hits to a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The per-project timeout expired.
    Timeout,
    /// The aggregate query deadline passed before the project answered.
    DeadlineExceeded,
    /// The project has indexing disabled and was never queried.
    IndexingDisabled,
    /// The collaborator observed cancellation and gave up.
    Cancelled,
    /// The retrieval task panicked.
    Panicked,
    /// The collaborator returned an error.
    Failed { reason: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timeout"),
            Self::DeadlineExceeded => f.write_str("deadline_exceeded"),
            Self::IndexingDisabled => f.write_str("indexing_disabled"),
            Self::Cancelled => f.write_str("cancelled"),
            Self::Panicked => f.write_str("panicked"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// A project excluded from ranking, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedProject {
    pub project_id: String,
    pub reason: SkipReason,
}

impl SkippedProject {
    pub fn new(project_id: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            project_id: project_id.into(),
            reason,
        }
    }
}

/// The response of a workspace search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResultPage {
    /// The requested window of the ranked sequence.
    pub results: Vec<RankedResult>,
    /// Projects that contributed nothing, sorted by project id.
    pub skipped_projects: Vec<SkippedProject>,
    /// Length of the full deduplicated sequence before paging.
    pub total_candidates: usize,
    /// The scope the query actually ran with.
    pub scope: SearchScope,
}

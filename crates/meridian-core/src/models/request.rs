use serde::{Deserialize, Serialize};

use super::scope::SearchScope;

/// Caller input to a workspace search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The project the query is issued from, if any.
    #[serde(default)]
    pub anchor_project_id: Option<String>,
    /// Falls back to the workspace's `default_scope` when unset.
    #[serde(default)]
    pub scope: Option<SearchScope>,
    pub query: String,
    pub limit: usize,
    /// Number of ranked results to skip (pagination).
    #[serde(default)]
    pub offset: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            anchor_project_id: None,
            scope: None,
            query: query.into(),
            limit,
            offset: 0,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor_project_id = Some(anchor.into());
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Hits to request from each project so that the page can be filled.
    pub fn fetch_limit(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }
}

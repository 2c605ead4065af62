//! RankingEngine: score → order → deduplicate → assign ranks.

pub mod deduplication;
pub mod ordering;
pub mod scorer;

use meridian_core::config::SearchConfig;
use meridian_core::errors::RankingError;
use meridian_core::models::{RankedResult, RawHit};
use tracing::debug;

use crate::scope::{EligibleProject, EligibleSet};
use scorer::BoostPolicy;

/// Merges per-project hits into one globally ordered sequence.
///
/// Pure and deterministic: identical inputs give identical output.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    policy: BoostPolicy,
}

impl RankingEngine {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            policy: BoostPolicy::from_config(config),
        }
    }

    /// The multiplier applied to hits of `project`, in [1.0, relationship_boost].
    pub fn relation_weight(&self, project: &EligibleProject) -> f64 {
        self.policy.relation_weight(project.relation_kind, project.edge_weight)
    }

    /// Rank every hit. Ranks are 1-based over the full deduplicated sequence.
    ///
    /// Fails on a hit from a project outside `eligible` or with a non-finite
    /// score; those indicate a broken collaborator.
    pub fn rank(
        &self,
        eligible: &EligibleSet,
        hits: Vec<RawHit>,
    ) -> Result<Vec<RankedResult>, RankingError> {
        let mut scored = scorer::score(hits, eligible, &self.policy)?;
        ordering::sort(&mut scored);
        let before = scored.len();
        let unique = deduplication::deduplicate(scored);
        debug!(
            hits = before,
            duplicates = before - unique.len(),
            boost_enabled = self.policy.enabled,
            "hits ranked"
        );

        Ok(unique
            .into_iter()
            .enumerate()
            .map(|(i, s)| RankedResult {
                project_id: s.hit.project_id,
                document_id: s.hit.document_id,
                final_score: s.final_score,
                boost_applied: s.boost_applied,
                relation_kind: s.relation_kind,
                rank: i + 1,
                payload: s.hit.payload,
            })
            .collect())
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

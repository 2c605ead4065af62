//! Relation-weight scoring.
//!
//! `final_score = base_score × relation_weight`, where the weight interpolates
//! between 1.0 and the configured boost ceiling by the project's path
//! affinity to the anchor:
//!
//! ```text
//! relation_weight = 1 + (relationship_boost − 1) × edge_weight
//! ```
//!
//! Self and unrelated projects always get 1.0, as does every project when
//! cross-project ranking is off.

use meridian_core::config::search_config::clamp_boost;
use meridian_core::config::SearchConfig;
use meridian_core::constants::NEUTRAL_WEIGHT;
use meridian_core::errors::RankingError;
use meridian_core::models::{RawHit, RelationKind};

use crate::scope::EligibleSet;

/// How relation weights are derived for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostPolicy {
    pub enabled: bool,
    /// Ceiling in [1.0, 3.0].
    pub ceiling: f64,
}

impl BoostPolicy {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            enabled: config.cross_project_ranking,
            ceiling: clamp_boost(config.relationship_boost),
        }
    }

    pub fn relation_weight(&self, kind: RelationKind, edge_weight: f64) -> f64 {
        if !self.enabled || !kind.is_boostable() {
            return NEUTRAL_WEIGHT;
        }
        let affinity = if edge_weight.is_nan() {
            0.0
        } else {
            edge_weight.clamp(0.0, 1.0)
        };
        let weight = NEUTRAL_WEIGHT + (self.ceiling - NEUTRAL_WEIGHT) * affinity;
        weight.clamp(NEUTRAL_WEIGHT, self.ceiling)
    }
}

/// A hit with its final score and the relation it was scored under.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    pub hit: RawHit,
    pub final_score: f64,
    pub boost_applied: f64,
    pub relation_kind: RelationKind,
}

/// Score every hit against its project's relation to the anchor.
pub fn score(
    hits: Vec<RawHit>,
    eligible: &EligibleSet,
    policy: &BoostPolicy,
) -> Result<Vec<ScoredHit>, RankingError> {
    hits.into_iter()
        .map(|hit| {
            let Some(project) = eligible.get(&hit.project_id) else {
                return Err(RankingError::UnexpectedProject {
                    project_id: hit.project_id,
                });
            };
            if !hit.base_score.is_finite() {
                return Err(RankingError::NonFiniteScore {
                    project_id: hit.project_id,
                    document_id: hit.document_id,
                });
            }
            let boost_applied = policy.relation_weight(project.relation_kind, project.edge_weight);
            Ok(ScoredHit {
                final_score: hit.base_score * boost_applied,
                boost_applied,
                relation_kind: project.relation_kind,
                hit,
            })
        })
        .collect()
}

//! Workspace-level search settings.
//!
//! # Examples
//!
//! ```
//! use meridian_core::config::SearchConfig;
//!
//! let config = SearchConfig {
//!     relationship_boost: 7.0,
//!     ..SearchConfig::default()
//! };
//! assert!((config.normalized().relationship_boost - 3.0).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_RELATIONSHIP_BOOST, MIN_RELATIONSHIP_BOOST};
use crate::models::SearchScope;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Scope used when a request names none. Default: workspace.
    pub default_scope: SearchScope,
    /// Whether relationship boosts apply at all. Default: true.
    pub cross_project_ranking: bool,
    /// Multiplicative ceiling for related-project hits, in [1.0, 3.0]. Default: 1.5.
    pub relationship_boost: f64,
    /// Hop limit of the `related` scope. Default: 1.
    pub related_max_hops: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_scope: defaults::DEFAULT_SCOPE,
            cross_project_ranking: defaults::DEFAULT_CROSS_PROJECT_RANKING,
            relationship_boost: defaults::DEFAULT_RELATIONSHIP_BOOST,
            related_max_hops: defaults::DEFAULT_RELATED_MAX_HOPS,
        }
    }
}

impl SearchConfig {
    /// Clamp out-of-range values instead of rejecting them, so a config edit
    /// never changes the shape of the ranking order.
    pub fn normalized(mut self) -> Self {
        self.relationship_boost = clamp_boost(self.relationship_boost);
        self
    }
}

/// Clamp a boost into [1.0, 3.0]. NaN falls back to the default.
pub fn clamp_boost(boost: f64) -> f64 {
    if boost.is_nan() {
        return defaults::DEFAULT_RELATIONSHIP_BOOST;
    }
    boost.clamp(MIN_RELATIONSHIP_BOOST, MAX_RELATIONSHIP_BOOST)
}

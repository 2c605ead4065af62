use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Fan-out settings of the hit aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Timeout of a single project's retrieval call. Default: 5000.
    pub per_project_timeout_ms: u64,
    /// Deadline of the whole fan-out. Default: 15000.
    pub query_deadline_ms: u64,
    /// How long cancelled calls get to wind down before being aborted. Default: 250.
    pub cancellation_grace_ms: u64,
    /// Maximum in-flight retrieval calls, 0 = unbounded. Default: 8.
    pub max_concurrent_retrievals: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            per_project_timeout_ms: defaults::DEFAULT_PER_PROJECT_TIMEOUT_MS,
            query_deadline_ms: defaults::DEFAULT_QUERY_DEADLINE_MS,
            cancellation_grace_ms: defaults::DEFAULT_CANCELLATION_GRACE_MS,
            max_concurrent_retrievals: defaults::DEFAULT_MAX_CONCURRENT_RETRIEVALS,
        }
    }
}

impl AggregationConfig {
    pub fn per_project_timeout(&self) -> Duration {
        Duration::from_millis(self.per_project_timeout_ms)
    }

    pub fn query_deadline(&self) -> Duration {
        Duration::from_millis(self.query_deadline_ms)
    }

    pub fn cancellation_grace(&self) -> Duration {
        Duration::from_millis(self.cancellation_grace_ms)
    }
}

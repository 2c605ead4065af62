// Single source of truth for all default values.

use crate::models::SearchScope;

// --- Search ---
pub const DEFAULT_SCOPE: SearchScope = SearchScope::Workspace;
pub const DEFAULT_CROSS_PROJECT_RANKING: bool = true;
pub const DEFAULT_RELATIONSHIP_BOOST: f64 = 1.5;
pub const DEFAULT_RELATED_MAX_HOPS: usize = 1;

// --- Aggregation ---
pub const DEFAULT_PER_PROJECT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_QUERY_DEADLINE_MS: u64 = 15_000;
pub const DEFAULT_CANCELLATION_GRACE_MS: u64 = 250;
pub const DEFAULT_MAX_CONCURRENT_RETRIEVALS: usize = 8;

// --- Observability ---
pub const LOG_ENV_VAR: &str = "MERIDIAN_LOG";
pub const DEFAULT_LOG_FILTER: &str = "meridian=info";

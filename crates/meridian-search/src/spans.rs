//! Span definitions per operation: search, aggregation, ranking.
//!
//! Each span carries the operation's key fields via the `tracing` crate.

/// Create a search span.
#[macro_export]
macro_rules! search_span {
    ($query:expr, $scope:expr) => {
        tracing::info_span!("meridian.search", query = %$query, scope = %$scope)
    };
}

/// Create an aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($projects:expr) => {
        tracing::info_span!("meridian.aggregation", projects = $projects)
    };
}

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($hits:expr) => {
        tracing::debug_span!("meridian.ranking", hits = $hits)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "meridian.search";
    pub const AGGREGATION: &str = "meridian.aggregation";
    pub const RANKING: &str = "meridian.ranking";
}

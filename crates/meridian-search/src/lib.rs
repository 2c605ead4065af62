//! # meridian-search
//!
//! Workspace search over several independently indexed projects.
//!
//! Pipeline: scope resolution (graph lookup) → one retrieval call per
//! eligible project, fanned out concurrently → relationship-aware scoring →
//! total-order sort → deduplication → paging.
//!
//! Everything except the fan-out is synchronous, CPU-only, and reads an
//! immutable [`WorkspaceSnapshot`] shared by all in-flight queries.

pub mod aggregation;
pub mod engine;
pub mod ranking;
pub mod scope;
pub mod snapshot;
pub mod spans;

pub use aggregation::{AggregatedHits, HitAggregator};
pub use engine::WorkspaceSearch;
pub use ranking::RankingEngine;
pub use scope::{EligibleProject, EligibleSet, ScopeResolver};
pub use snapshot::WorkspaceSnapshot;

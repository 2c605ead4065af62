//! # meridian-core
//!
//! Foundation crate for the Meridian workspace search engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{AggregationConfig, SearchConfig, WorkspaceConfig};
pub use errors::{MeridianError, MeridianResult};
pub use models::{
    Project, RankedResult, RankedResultPage, RawHit, RelationKind, Relationship,
    RelationshipType, SearchRequest, SearchScope, SkipReason, SkippedProject,
};
pub use traits::{Cancellable, CancellationToken, IProjectRetriever, RetrieveRequest};

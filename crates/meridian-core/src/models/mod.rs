//! Data model: projects, relationships, scopes, hits, and ranked results.

pub mod hit;
pub mod project;
pub mod relationship;
pub mod request;
pub mod scope;

pub use hit::{RankedResult, RankedResultPage, RawHit, SkipReason, SkippedProject};
pub use project::{IndexingConfig, IndexingPriority, Project};
pub use relationship::{Relationship, RelationshipType};
pub use request::SearchRequest;
pub use scope::{RelationKind, SearchScope};

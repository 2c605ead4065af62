//! Seams to external collaborators.

pub mod cancellation;
pub mod retriever;

pub use cancellation::{Cancellable, CancellationToken};
pub use retriever::{IProjectRetriever, RetrieveRequest};

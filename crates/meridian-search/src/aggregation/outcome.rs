//! A single project's retrieval call and its outcome.

use std::sync::Arc;
use std::time::Duration;

use meridian_core::errors::RetrieveError;
use meridian_core::models::{RawHit, SkipReason};
use meridian_core::traits::{CancellationToken, IProjectRetriever, RetrieveRequest};
use tokio::sync::Semaphore;

#[derive(Debug)]
pub(crate) enum Outcome {
    Hits(Vec<RawHit>),
    Skipped(SkipReason),
}

impl From<RetrieveError> for Outcome {
    fn from(err: RetrieveError) -> Self {
        match err {
            RetrieveError::Cancelled => Self::Skipped(SkipReason::Cancelled),
            RetrieveError::Failed { reason } => Self::Skipped(SkipReason::Failed { reason }),
        }
    }
}

/// Run one retrieval call. The timeout starts once a concurrency permit is
/// held.
pub(crate) async fn retrieve_one<R: IProjectRetriever>(
    retriever: Arc<R>,
    request: RetrieveRequest,
    cancel: CancellationToken,
    limiter: Option<Arc<Semaphore>>,
    per_project_timeout: Duration,
) -> (String, Outcome) {
    let project_id = request.project_id.clone();
    let _permit = match limiter {
        Some(semaphore) => semaphore.acquire_owned().await.ok(),
        None => None,
    };

    let call = retriever.retrieve(request, cancel);
    let outcome = match tokio::time::timeout(per_project_timeout, call).await {
        Ok(Ok(hits)) => Outcome::Hits(hits),
        Ok(Err(err)) => Outcome::from(err),
        Err(_) => Outcome::Skipped(SkipReason::Timeout),
    };
    (project_id, outcome)
}

use std::future::Future;

use crate::errors::RetrieveError;
use crate::models::RawHit;

use super::CancellationToken;

/// One retrieval call: the hits of `project_id` for `query`, at most `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieveRequest {
    pub project_id: String,
    pub query: String,
    pub limit: usize,
}

/// The external retrieval subsystem that scores hits within one project.
///
/// Must be safe to call concurrently for distinct project ids. Implementations
/// should poll `cancel` and return [`RetrieveError::Cancelled`] once it fires.
pub trait IProjectRetriever: Send + Sync + 'static {
    fn retrieve(
        &self,
        request: RetrieveRequest,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<Vec<RawHit>, RetrieveError>> + Send;
}

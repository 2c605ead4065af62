//! HitAggregator: concurrent per-project retrieval with per-call timeouts,
//! an aggregate deadline, and cooperative cancellation.

mod outcome;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use meridian_core::config::AggregationConfig;
use meridian_core::errors::AggregationError;
use meridian_core::models::{Project, RawHit, SkipReason, SkippedProject};
use meridian_core::traits::{Cancellable, CancellationToken, IProjectRetriever, RetrieveRequest};
use meridian_graph::WorkspaceModel;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, warn};

use crate::scope::EligibleSet;
use outcome::{retrieve_one, Outcome};

/// Hits gathered from every project that answered in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedHits {
    /// Hits of all successful projects, exclude globs applied.
    pub hits: Vec<RawHit>,
    /// Projects that contributed nothing, sorted by project id.
    pub skipped: Vec<SkippedProject>,
    /// Number of projects a retrieval call was issued for.
    pub dispatched: usize,
}

/// Fans one query out to every eligible project.
pub struct HitAggregator<R: IProjectRetriever> {
    retriever: Arc<R>,
    config: AggregationConfig,
}

impl<R: IProjectRetriever> HitAggregator<R> {
    pub fn new(retriever: Arc<R>, config: AggregationConfig) -> Self {
        Self { retriever, config }
    }

    /// Issue one retrieval per eligible project and collect what completes
    /// before the query deadline.
    ///
    /// Projects with indexing disabled are skipped without a call. Calls are
    /// dispatched in indexing-priority order and bounded by
    /// `max_concurrent_retrievals`. A project that fails, times out, or
    /// panics is reported in `skipped` and never fails the query, unless
    /// every dispatched project failed.
    pub async fn collect(
        &self,
        model: &WorkspaceModel,
        eligible: &EligibleSet,
        query: &str,
        limit: usize,
    ) -> Result<AggregatedHits, AggregationError> {
        let mut skipped = Vec::new();
        let mut targets: Vec<&Project> = Vec::with_capacity(eligible.len());
        for id in eligible.project_ids() {
            match model.project(id) {
                Some(project) if project.indexing.enabled => targets.push(project),
                Some(_) => skipped.push(SkippedProject::new(id, SkipReason::IndexingDisabled)),
                None => warn!(project = id, "eligible project missing from model"),
            }
        }
        targets.sort_by(|a, b| {
            a.indexing
                .priority
                .cmp(&b.indexing.priority)
                .then_with(|| a.id.cmp(&b.id))
        });

        if targets.is_empty() {
            skipped.sort_by(|a, b| a.project_id.cmp(&b.project_id));
            return Ok(AggregatedHits {
                hits: Vec::new(),
                skipped,
                dispatched: 0,
            });
        }

        let dispatched = targets.len();
        let cancel = CancellationToken::new();
        let limiter = match self.config.max_concurrent_retrievals {
            0 => None,
            n => Some(Arc::new(Semaphore::new(n.min(Semaphore::MAX_PERMITS)))),
        };
        let per_project_timeout = self.config.per_project_timeout();
        let deadline = Instant::now() + self.config.query_deadline();

        let mut tasks = JoinSet::new();
        let mut pending = BTreeSet::new();
        let mut task_projects = HashMap::with_capacity(targets.len());
        for project in &targets {
            pending.insert(project.id.clone());
            let request = RetrieveRequest {
                project_id: project.id.clone(),
                query: query.to_string(),
                limit,
            };
            let handle = tasks.spawn(retrieve_one(
                Arc::clone(&self.retriever),
                request,
                cancel.clone(),
                limiter.clone(),
                per_project_timeout,
            ));
            task_projects.insert(handle.id(), project.id.clone());
        }
        debug!(dispatched, "retrievals dispatched");

        let mut hits = Vec::new();
        let mut succeeded = 0usize;
        loop {
            match timeout_at(deadline, tasks.join_next()).await {
                Ok(Some(Ok((project_id, outcome)))) => {
                    pending.remove(&project_id);
                    match outcome {
                        Outcome::Hits(project_hits) => {
                            succeeded += 1;
                            let before = project_hits.len();
                            hits.extend(project_hits.into_iter().filter(|hit| {
                                !hit.path
                                    .as_deref()
                                    .is_some_and(|path| model.is_excluded(&hit.project_id, path))
                            }));
                            debug!(project = %project_id, hits = before, "project answered");
                        }
                        Outcome::Skipped(reason) => {
                            warn!(project = %project_id, %reason, "project skipped");
                            skipped.push(SkippedProject::new(project_id, reason));
                        }
                    }
                }
                Ok(Some(Err(join_error))) => {
                    let Some(project_id) = task_projects.get(&join_error.id()) else {
                        warn!(error = %join_error, "unknown retrieval task failed");
                        continue;
                    };
                    warn!(project = %project_id, error = %join_error, "retrieval task panicked");
                    pending.remove(project_id);
                    skipped.push(SkippedProject::new(project_id.clone(), SkipReason::Panicked));
                }
                Ok(None) => break,
                Err(_) => {
                    warn!(outstanding = pending.len(), "query deadline exceeded");
                    cancel.cancel();
                    let grace = self.config.cancellation_grace();
                    let _ = timeout(grace, async {
                        while tasks.join_next().await.is_some() {}
                    })
                    .await;
                    tasks.abort_all();
                    for project_id in std::mem::take(&mut pending) {
                        skipped.push(SkippedProject::new(project_id, SkipReason::DeadlineExceeded));
                    }
                    break;
                }
            }
        }

        // Tasks that never reported back.
        for project_id in pending {
            warn!(project = %project_id, "retrieval task lost");
            skipped.push(SkippedProject::new(project_id, SkipReason::Panicked));
        }
        skipped.sort_by(|a, b| a.project_id.cmp(&b.project_id));

        if succeeded == 0 {
            return Err(AggregationError::AllProjectsFailed { skipped });
        }

        Ok(AggregatedHits {
            hits,
            skipped,
            dispatched,
        })
    }
}

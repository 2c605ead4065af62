//! WorkspaceSearch: the query entry point.
//!
//! Holds the current [`WorkspaceSnapshot`] behind a lock that is only taken
//! to clone or swap the `Arc`. Every query runs against the snapshot it
//! started with; a reload never disturbs in-flight queries.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use meridian_core::config::WorkspaceConfig;
use meridian_core::errors::{ConfigError, MeridianResult};
use meridian_core::models::{RankedResultPage, SearchRequest};
use meridian_core::traits::IProjectRetriever;
use tracing::{debug, info, warn, Instrument};

use crate::aggregation::HitAggregator;
use crate::ranking::RankingEngine;
use crate::scope::ScopeResolver;
use crate::snapshot::WorkspaceSnapshot;

/// Relationship-aware search over every project of a workspace.
pub struct WorkspaceSearch<R: IProjectRetriever> {
    snapshot: RwLock<Arc<WorkspaceSnapshot>>,
    retriever: Arc<R>,
}

impl<R: IProjectRetriever> WorkspaceSearch<R> {
    pub fn new(config: WorkspaceConfig, retriever: Arc<R>) -> Result<Self, ConfigError> {
        let snapshot = WorkspaceSnapshot::build(config)?;
        Ok(Self::from_snapshot(snapshot, retriever))
    }

    /// Load the workspace file at `path` (environment overrides applied).
    pub fn open(path: &Path, retriever: Arc<R>) -> Result<Self, ConfigError> {
        Self::new(WorkspaceConfig::load(path)?, retriever)
    }

    pub fn from_snapshot(snapshot: WorkspaceSnapshot, retriever: Arc<R>) -> Self {
        info!(
            workspace = snapshot.model.name(),
            projects = snapshot.model.len(),
            edges = snapshot.graph.edge_count(),
            "workspace loaded"
        );
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            retriever,
        }
    }

    /// The snapshot new queries currently run against.
    pub fn snapshot(&self) -> Arc<WorkspaceSnapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Build a snapshot from `config` and swap it in.
    ///
    /// On error the current snapshot stays in place.
    pub fn reload(&self, config: WorkspaceConfig) -> Result<(), ConfigError> {
        let next = match WorkspaceSnapshot::build(config) {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                warn!(error = %e, "workspace reload rejected, keeping current snapshot");
                return Err(e);
            }
        };
        info!(
            workspace = next.model.name(),
            projects = next.model.len(),
            edges = next.graph.edge_count(),
            "workspace reloaded"
        );
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        Ok(())
    }

    /// Run one query.
    ///
    /// Scope errors surface before any retrieval call. Individual project
    /// failures are reported in `skipped_projects`; the query only fails when
    /// every dispatched project failed.
    pub async fn search(&self, request: &SearchRequest) -> MeridianResult<RankedResultPage> {
        let snapshot = self.snapshot();
        let scope = request
            .scope
            .unwrap_or(snapshot.model.search_config().default_scope);
        let span = crate::search_span!(request.query, scope);
        self.run(snapshot, request).instrument(span).await
    }

    async fn run(
        &self,
        snapshot: Arc<WorkspaceSnapshot>,
        request: &SearchRequest,
    ) -> MeridianResult<RankedResultPage> {
        let WorkspaceSnapshot { model, graph } = snapshot.as_ref();

        let eligible = ScopeResolver::new(model, graph)
            .resolve(request.anchor_project_id.as_deref(), request.scope)?;
        let scope = eligible.scope();

        if request.limit == 0 {
            debug!("zero limit, no retrieval issued");
            return Ok(RankedResultPage {
                results: Vec::new(),
                skipped_projects: Vec::new(),
                total_candidates: 0,
                scope,
            });
        }

        let aggregator =
            HitAggregator::new(Arc::clone(&self.retriever), model.aggregation_config().clone());
        let aggregated = aggregator
            .collect(model, &eligible, &request.query, request.fetch_limit())
            .instrument(crate::aggregation_span!(eligible.len()))
            .await?;

        let ranked = {
            let _guard = crate::ranking_span!(aggregated.hits.len()).entered();
            RankingEngine::new(model.search_config()).rank(&eligible, aggregated.hits)?
        };
        let total_candidates = ranked.len();
        let results: Vec<_> = ranked
            .into_iter()
            .skip(request.offset)
            .take(request.limit)
            .collect();

        info!(
            %scope,
            eligible = eligible.len(),
            dispatched = aggregated.dispatched,
            skipped = aggregated.skipped.len(),
            total_candidates,
            returned = results.len(),
            "search complete"
        );

        Ok(RankedResultPage {
            results,
            skipped_projects: aggregated.skipped,
            total_candidates,
            scope,
        })
    }
}

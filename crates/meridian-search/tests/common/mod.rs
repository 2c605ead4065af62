//! Shared helpers: a scriptable retriever and fixture loading.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use meridian_core::config::WorkspaceConfig;
use meridian_core::errors::RetrieveError;
use meridian_core::models::RawHit;
use meridian_core::traits::{Cancellable, CancellationToken, IProjectRetriever, RetrieveRequest};
use meridian_search::WorkspaceSnapshot;

/// What the mock does when asked for one project.
#[derive(Debug, Clone)]
pub enum Behavior {
    Hits(Vec<RawHit>),
    /// Answer after sleeping.
    Delayed(Duration, Vec<RawHit>),
    Fail(String),
    /// Never answers and ignores cancellation.
    Hang,
    /// Never answers until cancelled, then reports cancellation.
    HangUntilCancelled,
    Panic,
}

#[derive(Default)]
pub struct MockRetriever {
    behaviors: HashMap<String, Behavior>,
    calls: Mutex<Vec<RetrieveRequest>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, project_id: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(project_id.to_string(), behavior);
        self
    }

    pub fn hits(self, project_id: &str, hits: Vec<RawHit>) -> Self {
        self.with(project_id, Behavior::Hits(hits))
    }

    /// Project ids in call order.
    pub fn called(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.project_id.clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<RetrieveRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl IProjectRetriever for MockRetriever {
    async fn retrieve(
        &self,
        request: RetrieveRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<RawHit>, RetrieveError> {
        self.calls.lock().unwrap().push(request.clone());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let behavior = self
            .behaviors
            .get(&request.project_id)
            .cloned()
            .unwrap_or(Behavior::Hits(Vec::new()));

        let result = match behavior {
            Behavior::Hits(hits) => Ok(hits),
            Behavior::Delayed(delay, hits) => {
                tokio::time::sleep(delay).await;
                Ok(hits)
            }
            Behavior::Fail(reason) => Err(RetrieveError::failed(reason)),
            Behavior::Hang => std::future::pending().await,
            Behavior::HangUntilCancelled => loop {
                if cancel.is_cancelled() {
                    break Err(RetrieveError::Cancelled);
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            },
            Behavior::Panic => panic!("retriever crashed for {}", request.project_id),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result.map(|hits: Vec<RawHit>| hits.into_iter().take(request.limit).collect())
    }
}

pub fn workspace_config(fixture: &str) -> WorkspaceConfig {
    let json = test_fixtures::load_fixture_str(fixture);
    WorkspaceConfig::from_json_str(&json).unwrap()
}

pub fn snapshot(fixture: &str) -> WorkspaceSnapshot {
    WorkspaceSnapshot::build(workspace_config(fixture)).unwrap()
}

pub fn hit(project_id: &str, document_id: &str, base_score: f64) -> RawHit {
    RawHit::new(project_id, document_id, base_score)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

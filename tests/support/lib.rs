//! Shared helpers for the workspace integration tests.

use std::sync::Arc;

use parking_lot::Mutex;

use feedfetch_core::event::Strategy;
use feedfetch_core::failure::ScriptedFailure;
use feedfetch_core::model::AggregateResult;
use feedfetch_core::observer::FetchObserver;
use feedfetch_core::observers::RecordingObserver;
use feedfetch_core::options::Latencies;
use feedfetch_core::simulated::SimulatedSource;
use feedfetch_core::source::{FeedSource, FetchTarget};
use feedfetch_orchestration::interfaces::PresentationSink;
use feedfetch_orchestration::orchestrator::Orchestrator;
use feedfetch_orchestration::selection::build_orchestrator;

/// Sink that counts presentations and keeps the last aggregate.
#[derive(Default)]
pub struct CountingSink {
    calls: Mutex<Vec<Option<AggregateResult>>>,
}

impl CountingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `present` was called, absent results included.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.lock().len()
    }

    /// The most recent aggregate handed to the sink.
    #[must_use]
    pub fn last(&self) -> Option<AggregateResult> {
        self.calls.lock().iter().rev().find_map(Clone::clone)
    }
}

impl PresentationSink for CountingSink {
    fn present(&self, result: Option<&AggregateResult>) {
        self.calls.lock().push(result.cloned());
    }
}

/// Simulated source that fails exactly the given targets.
#[must_use]
pub fn scripted_source(latencies: Latencies, failures: &[FetchTarget]) -> Arc<dyn FeedSource> {
    let policy = failures
        .iter()
        .fold(ScriptedFailure::new(), |policy, &target| policy.fail(target));
    Arc::new(SimulatedSource::new(latencies, Arc::new(policy)))
}

/// Simulated source whose comments fetches fail for the given posts.
#[must_use]
pub fn failing_comments(latencies: Latencies, posts: &[u64]) -> Arc<dyn FeedSource> {
    let targets: Vec<FetchTarget> = posts.iter().map(|&id| FetchTarget::Comments(id)).collect();
    scripted_source(latencies, &targets)
}

/// Orchestrator for `strategy` wired to a fresh recording observer.
#[must_use]
pub fn recorded(
    strategy: Strategy,
    source: Arc<dyn FeedSource>,
) -> (Box<dyn Orchestrator>, Arc<RecordingObserver>) {
    let recorder = Arc::new(RecordingObserver::new());
    let observer: Arc<dyn FetchObserver> = recorder.clone();
    (build_orchestrator(strategy, source, observer), recorder)
}

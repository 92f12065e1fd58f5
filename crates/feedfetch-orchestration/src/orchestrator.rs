//! Core orchestration seam and the run-and-present driver.

use async_trait::async_trait;
use tokio::time::Instant;

use feedfetch_core::event::{FetchEvent, Strategy};
use feedfetch_core::model::AggregateResult;
use feedfetch_core::observer::FetchObserver;
use feedfetch_core::source::FetchError;

use crate::interfaces::{PresentationSink, RunReport};

/// Composes the leaf fetch operations into one aggregate.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// The composition strategy this orchestrator implements.
    fn strategy(&self) -> Strategy;

    /// Fetch profile, posts, and comments for `user_id`.
    ///
    /// Comments failures are isolated per post. Profile and posts failures
    /// abort the run and no aggregate is produced.
    async fn fetch(&self, user_id: u64) -> Result<AggregateResult, FetchError>;
}

/// Run one orchestration, time it, and hand a successful aggregate to `sink`.
///
/// The sink is invoked exactly once on success and never on failure.
pub async fn run_and_present(
    orchestrator: &dyn Orchestrator,
    user_id: u64,
    observer: &dyn FetchObserver,
    sink: &dyn PresentationSink,
) -> RunReport {
    let strategy = orchestrator.strategy();
    let start = Instant::now();
    let outcome = orchestrator.fetch(user_id).await;
    let elapsed = start.elapsed();

    match &outcome {
        Ok(aggregate) => {
            observer.on_event(&FetchEvent::Completed { strategy, elapsed });
            sink.present(Some(aggregate));
        }
        Err(err) => {
            observer.on_event(&FetchEvent::Aborted {
                strategy,
                reason: err.to_string(),
            });
        }
    }

    RunReport {
        strategy,
        user_id,
        outcome,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use feedfetch_core::failure::ScriptedFailure;
    use feedfetch_core::observers::{NoOpObserver, RecordingObserver};
    use feedfetch_core::options::Latencies;
    use feedfetch_core::simulated::SimulatedSource;
    use feedfetch_core::source::FetchTarget;

    use crate::concurrent::ConcurrentOrchestrator;
    use crate::sequential::SequentialOrchestrator;

    #[derive(Default)]
    struct CountingSink {
        presented: AtomicUsize,
    }

    impl PresentationSink for CountingSink {
        fn present(&self, result: Option<&AggregateResult>) {
            if result.is_some() {
                self.presented.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn success_presents_once_and_reports_elapsed() {
        let source = Arc::new(SimulatedSource::reliable(Latencies::default()));
        let orchestrator = ConcurrentOrchestrator::new(source, Arc::new(NoOpObserver::new()));
        let observer = RecordingObserver::new();
        let sink = CountingSink::default();

        let report = run_and_present(&orchestrator, 1, &observer, &sink).await;

        assert!(report.is_success());
        assert_eq!(report.strategy, Strategy::Concurrent);
        assert!(report.elapsed >= Duration::from_millis(3500));
        assert!(report.elapsed < Duration::from_millis(3550));
        assert_eq!(sink.presented.load(Ordering::Relaxed), 1);
        assert_eq!(
            observer.events(),
            vec![FetchEvent::Completed {
                strategy: Strategy::Concurrent,
                elapsed: report.elapsed
            }]
        );
    }

    #[tokio::test]
    async fn fatal_failure_skips_sink() {
        let policy = ScriptedFailure::new().fail(FetchTarget::Profile(1));
        let source = Arc::new(SimulatedSource::new(Latencies::zero(), Arc::new(policy)));
        let orchestrator = SequentialOrchestrator::new(source, Arc::new(NoOpObserver::new()));
        let observer = RecordingObserver::new();
        let sink = CountingSink::default();

        let report = run_and_present(&orchestrator, 1, &observer, &sink).await;

        assert!(!report.is_success());
        assert_eq!(sink.presented.load(Ordering::Relaxed), 0);
        assert!(matches!(
            observer.events().as_slice(),
            [FetchEvent::Aborted {
                strategy: Strategy::Sequential,
                ..
            }]
        ));
    }
}

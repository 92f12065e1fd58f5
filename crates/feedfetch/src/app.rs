//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use feedfetch_cli::presenter::{print_json_reports, CliReportPresenter, JsonSink, TerminalSink};
use feedfetch_core::event::Strategy;
use feedfetch_core::observer::{EventSubject, FetchObserver};
use feedfetch_core::observers::{LoggingObserver, RecordingObserver};
use feedfetch_core::simulated::SimulatedSource;
use feedfetch_core::source::{FeedSource, FetchError};
use feedfetch_orchestration::interfaces::{
    NullSink, PresentationSink, ReportPresenter, RunReport,
};
use feedfetch_orchestration::orchestrator::run_and_present;
use feedfetch_orchestration::selection::{build_orchestrator, select_strategies};

use crate::config::AppConfig;

/// Run the application.
pub async fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        feedfetch_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = config.fetch_options()?;
    let strategies = select_strategies(&config.mode)?;
    let source: Arc<dyn FeedSource> = Arc::new(SimulatedSource::from_options(&opts)?);

    // Several JSON runs are printed together once all have finished.
    let json_reports = config.json && strategies.len() > 1;
    let sink: Box<dyn PresentationSink> = if json_reports {
        Box::new(NullSink)
    } else if config.json {
        Box::new(JsonSink)
    } else {
        Box::new(TerminalSink::new(config.clear))
    };
    let presenter = CliReportPresenter::new(config.quiet || config.json);

    let reports = run_strategies(
        config.user_id,
        &strategies,
        &source,
        sink.as_ref(),
        &presenter,
    )
    .await;

    if json_reports {
        print_json_reports(&reports);
    } else if reports.len() > 1 {
        presenter.present_comparison(&reports);
    }

    match first_fatal(reports) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Run each strategy in turn against the same source.
///
/// A failed run does not stop the following ones.
async fn run_strategies(
    user_id: u64,
    strategies: &[Strategy],
    source: &Arc<dyn FeedSource>,
    sink: &dyn PresentationSink,
    presenter: &dyn ReportPresenter,
) -> Vec<RunReport> {
    let logger: Arc<dyn FetchObserver> = Arc::new(LoggingObserver::new());
    let mut reports = Vec::with_capacity(strategies.len());

    for &strategy in strategies {
        let recorder = Arc::new(RecordingObserver::new());
        let subject = Arc::new(EventSubject::new());
        subject.register(Arc::clone(&logger));
        subject.register(recorder.clone());

        let observer: Arc<dyn FetchObserver> = subject;
        let orchestrator = build_orchestrator(strategy, Arc::clone(source), Arc::clone(&observer));
        debug!(%strategy, user_id, "Starting run");
        let report = run_and_present(orchestrator.as_ref(), user_id, observer.as_ref(), sink).await;

        match &report.outcome {
            Ok(_) => presenter.present_isolated(strategy, &recorder.failed_posts()),
            Err(err) => presenter.present_error(strategy, err),
        }
        reports.push(report);
    }

    reports
}

fn first_fatal(reports: Vec<RunReport>) -> Option<FetchError> {
    reports.into_iter().find_map(|r| r.outcome.err())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use feedfetch_cli::presenter::BufferSink;
    use feedfetch_core::failure::ScriptedFailure;
    use feedfetch_core::options::Latencies;
    use feedfetch_core::source::FetchTarget;

    fn scripted(targets: &[FetchTarget]) -> Arc<dyn FeedSource> {
        let policy = targets
            .iter()
            .fold(ScriptedFailure::new(), |policy, &target| policy.fail(target));
        Arc::new(SimulatedSource::new(Latencies::zero(), Arc::new(policy)))
    }

    #[tokio::test]
    async fn runs_both_strategies_and_presents_each() {
        let source = scripted(&[]);
        let sink = BufferSink::new();
        let presenter = CliReportPresenter::new(true);

        let reports = run_strategies(1, &Strategy::ALL, &source, &sink, &presenter).await;

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(RunReport::is_success));
        assert_eq!(sink.presentations(), 2);
        assert!(first_fatal(reports).is_none());
    }

    #[tokio::test]
    async fn failed_run_does_not_stop_the_next() {
        let source = scripted(&[FetchTarget::Profile(1)]);
        let sink = BufferSink::new();
        let presenter = CliReportPresenter::new(true);

        let reports = run_strategies(1, &Strategy::ALL, &source, &sink, &presenter).await;

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| !r.is_success()));
        assert_eq!(sink.presentations(), 0);
        assert!(matches!(first_fatal(reports), Some(FetchError::Profile { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn isolated_comments_still_present() {
        let source: Arc<dyn FeedSource> = {
            let policy = ScriptedFailure::comments_of([2]);
            Arc::new(SimulatedSource::new(Latencies::default(), Arc::new(policy)))
        };
        let sink = BufferSink::new();
        let presenter = CliReportPresenter::new(true);

        let reports = run_strategies(1, &[Strategy::Concurrent], &source, &sink, &presenter).await;

        assert_eq!(sink.presentations(), 1);
        assert!(reports[0].elapsed >= Duration::from_millis(3500));
        let aggregate = reports[0].aggregate().unwrap();
        assert_eq!(aggregate.posts()[1].comments(), Some(&[][..]));
    }
}

//! Orchestration interfaces.

use std::time::Duration;

use feedfetch_core::event::Strategy;
use feedfetch_core::model::AggregateResult;
use feedfetch_core::source::FetchError;

/// Consumer of a finished aggregate.
pub trait PresentationSink: Send + Sync {
    /// Render `result`, replacing any previous output.
    ///
    /// `None` leaves the current output untouched.
    fn present(&self, result: Option<&AggregateResult>);
}

/// Trait for presenting run summaries to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present a side-by-side summary of several runs.
    fn present_comparison(&self, reports: &[RunReport]);

    /// Present the posts whose comments were replaced by an empty list.
    fn present_isolated(&self, strategy: Strategy, post_ids: &[u64]);

    /// Present a fatal error.
    fn present_error(&self, strategy: Strategy, error: &FetchError);
}

/// Result of a single orchestration run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Strategy that produced this run.
    pub strategy: Strategy,
    /// User the run fetched.
    pub user_id: u64,
    /// The aggregate or the fatal error.
    pub outcome: Result<AggregateResult, FetchError>,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl RunReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The aggregate, if the run succeeded.
    #[must_use]
    pub fn aggregate(&self) -> Option<&AggregateResult> {
        self.outcome.as_ref().ok()
    }
}

/// Null sink (discards every result).
pub struct NullSink;

impl PresentationSink for NullSink {
    fn present(&self, _result: Option<&AggregateResult>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedfetch_core::model::User;

    fn user() -> User {
        User {
            id: 1,
            name: "Nicole Nigro".into(),
            email: "nicole@example.com".into(),
            username: "niclanigro".into(),
        }
    }

    #[test]
    fn null_sink() {
        let sink = NullSink;
        let aggregate = AggregateResult::assemble(user(), Vec::new()).unwrap();
        sink.present(Some(&aggregate));
        sink.present(None);
    }

    #[test]
    fn run_report_success() {
        let report = RunReport {
            strategy: Strategy::Concurrent,
            user_id: 1,
            outcome: AggregateResult::assemble(user(), Vec::new()),
            elapsed: Duration::from_millis(3500),
        };
        assert!(report.is_success());
        assert_eq!(report.aggregate().map(|a| a.user().id), Some(1));
    }

    #[test]
    fn run_report_failure() {
        let report = RunReport {
            strategy: Strategy::Sequential,
            user_id: 1,
            outcome: Err(FetchError::Profile {
                user_id: 1,
                reason: "down".into(),
            }),
            elapsed: Duration::from_millis(1000),
        };
        assert!(!report.is_success());
        assert!(report.aggregate().is_none());
    }
}

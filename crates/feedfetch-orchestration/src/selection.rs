//! Orchestrator selection logic.

use std::sync::Arc;

use feedfetch_core::event::Strategy;
use feedfetch_core::observer::FetchObserver;
use feedfetch_core::source::{FeedSource, FetchError};

use crate::concurrent::ConcurrentOrchestrator;
use crate::orchestrator::Orchestrator;
use crate::sequential::SequentialOrchestrator;

/// Get strategies to run based on mode selection (`all` or a strategy name).
pub fn select_strategies(mode: &str) -> Result<Vec<Strategy>, FetchError> {
    match mode {
        "all" | "both" => Ok(Strategy::ALL.to_vec()),
        name => Ok(vec![name.parse::<Strategy>()?]),
    }
}

/// Build the orchestrator for one strategy.
#[must_use]
pub fn build_orchestrator(
    strategy: Strategy,
    source: Arc<dyn FeedSource>,
    observer: Arc<dyn FetchObserver>,
) -> Box<dyn Orchestrator> {
    match strategy {
        Strategy::Sequential => Box::new(SequentialOrchestrator::new(source, observer)),
        Strategy::Concurrent => Box::new(ConcurrentOrchestrator::new(source, observer)),
    }
}

//! # feedfetch-orchestration
//!
//! Sequential and concurrent composition of the leaf fetch operations,
//! per-post failure isolation, strategy selection, and the hand-off to a
//! presentation sink.

pub mod concurrent;
pub mod interfaces;
pub mod isolation;
pub mod orchestrator;
pub mod selection;
pub mod sequential;

pub use concurrent::ConcurrentOrchestrator;
pub use interfaces::{NullSink, PresentationSink, ReportPresenter, RunReport};
pub use isolation::{resolve_comments, Settled};
pub use orchestrator::{run_and_present, Orchestrator};
pub use selection::{build_orchestrator, select_strategies};
pub use sequential::SequentialOrchestrator;

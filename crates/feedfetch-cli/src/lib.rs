//! # feedfetch-cli
//!
//! Rendering of aggregates, presentation sinks, run comparison output, and
//! shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod render;
pub mod ui;

pub use presenter::{
    print_json_reports, reports_to_json, BufferSink, CliReportPresenter, JsonSink, TerminalSink,
};
pub use render::{render, RenderNode};

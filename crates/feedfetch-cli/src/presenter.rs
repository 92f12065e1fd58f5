//! Presentation sinks and the CLI run-summary presenter.

use console::Term;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{error, warn};

use feedfetch_core::event::Strategy;
use feedfetch_core::model::AggregateResult;
use feedfetch_core::source::FetchError;
use feedfetch_orchestration::interfaces::{PresentationSink, ReportPresenter, RunReport};

use crate::output::{format_duration, format_speedup};
use crate::render::{render, to_text, RenderNode};
use crate::ui;

/// Paints rendered aggregates to the terminal.
pub struct TerminalSink {
    clear_screen: bool,
}

impl TerminalSink {
    #[must_use]
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl PresentationSink for TerminalSink {
    fn present(&self, result: Option<&AggregateResult>) {
        let Some(aggregate) = result else {
            return;
        };

        if self.clear_screen {
            if let Err(e) = Term::stdout().clear_screen() {
                warn!(error = %e, "Failed to clear the terminal");
            }
        }

        for node in render(aggregate) {
            match node {
                RenderNode::UserHeading { name, username } => {
                    println!("{}", ui::heading(&format!("User: {name} ({username})")));
                }
                RenderNode::Email { email } => println!("Email: {email}"),
                RenderNode::PostTitle { title } => println!("\n{}", ui::title(&title)),
                RenderNode::PostContent { content } => println!("{content}"),
                RenderNode::CommentList { items } => {
                    for item in items {
                        println!("  - {item}");
                    }
                }
            }
        }
    }
}

/// Writes aggregates to stdout as pretty JSON.
pub struct JsonSink;

impl PresentationSink for JsonSink {
    fn present(&self, result: Option<&AggregateResult>) {
        let Some(aggregate) = result else {
            return;
        };
        match serde_json::to_string_pretty(aggregate) {
            Ok(json) => println!("{json}"),
            Err(e) => error!(error = %e, "Failed to serialize aggregate"),
        }
    }
}

/// One run in the multi-run JSON document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunEntry<'a> {
    strategy: Strategy,
    elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregate: Option<&'a AggregateResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Serialize several runs as one JSON array, in run order.
///
/// Each entry carries the strategy, its elapsed milliseconds, and either the
/// aggregate or the error message.
pub fn reports_to_json(reports: &[RunReport]) -> serde_json::Result<String> {
    let entries: Vec<RunEntry<'_>> = reports
        .iter()
        .map(|report| RunEntry {
            strategy: report.strategy,
            elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            aggregate: report.aggregate(),
            error: report.outcome.as_ref().err().map(ToString::to_string),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Print several runs to stdout as a single JSON document.
pub fn print_json_reports(reports: &[RunReport]) {
    match reports_to_json(reports) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "Failed to serialize run reports"),
    }
}

/// Keeps the most recently presented render in memory.
#[derive(Default)]
pub struct BufferSink {
    state: Mutex<BufferState>,
}

#[derive(Default)]
struct BufferState {
    nodes: Vec<RenderNode>,
    presentations: usize,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes of the latest presentation.
    #[must_use]
    pub fn nodes(&self) -> Vec<RenderNode> {
        self.state.lock().nodes.clone()
    }

    /// Plain text of the latest presentation.
    #[must_use]
    pub fn text(&self) -> String {
        to_text(&self.state.lock().nodes)
    }

    /// How many aggregates have been presented.
    #[must_use]
    pub fn presentations(&self) -> usize {
        self.state.lock().presentations
    }
}

impl PresentationSink for BufferSink {
    fn present(&self, result: Option<&AggregateResult>) {
        let Some(aggregate) = result else {
            return;
        };
        let mut state = self.state.lock();
        state.nodes.clear();
        state.nodes.extend(render(aggregate));
        state.presentations += 1;
    }
}

/// CLI run-summary presenter.
pub struct CliReportPresenter {
    quiet: bool,
}

impl CliReportPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ReportPresenter for CliReportPresenter {
    fn present_comparison(&self, reports: &[RunReport]) {
        if self.quiet || reports.is_empty() {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for report in reports {
            let detail = match &report.outcome {
                Ok(aggregate) => format!(
                    "{} posts, {} comments",
                    aggregate.posts().len(),
                    aggregate.comment_count()
                ),
                Err(e) => e.to_string(),
            };
            println!(
                "  {:<12} {:>10} {} {detail}",
                report.strategy.label(),
                format_duration(report.elapsed),
                ui::status(report.is_success()),
            );
        }

        let elapsed_of = |strategy: Strategy| {
            reports
                .iter()
                .find(|r| r.strategy == strategy && r.is_success())
                .map(|r| r.elapsed)
        };
        if let (Some(sequential), Some(concurrent)) =
            (elapsed_of(Strategy::Sequential), elapsed_of(Strategy::Concurrent))
        {
            if let Some(speedup) = format_speedup(sequential, concurrent) {
                println!("\nParallel fetch was {speedup} faster than sequential");
            }
        }
    }

    fn present_isolated(&self, strategy: Strategy, post_ids: &[u64]) {
        if self.quiet || post_ids.is_empty() {
            return;
        }
        let ids: Vec<String> = post_ids.iter().map(ToString::to_string).collect();
        eprintln!(
            "{}: comments unavailable for post(s) {}",
            strategy.label(),
            ids.join(", ")
        );
    }

    fn present_error(&self, strategy: Strategy, error: &FetchError) {
        ui::print_error(&format!(
            "Error in {} fetch: {error}",
            strategy.label().to_lowercase()
        ));
    }
}

//! Fetch events emitted by orchestrators to observers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::source::FetchError;

/// How comment fetches are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One comments fetch at a time, in post order.
    Sequential,
    /// All comments fetches overlapping, joined at a barrier.
    Concurrent,
}

impl Strategy {
    /// Every strategy, in presentation order.
    pub const ALL: [Strategy; 2] = [Strategy::Sequential, Strategy::Concurrent];

    /// Display label used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Concurrent => "Parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "parallel" | "concurrent" | "par" => Ok(Self::Concurrent),
            other => Err(FetchError::Config(format!("unknown strategy: {other}"))),
        }
    }
}

/// Progress and error events produced during one orchestration run.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// The profile fetch resolved.
    ProfileRetrieved { user_id: u64 },
    /// The posts fetch resolved.
    PostsRetrieved { user_id: u64, count: usize },
    /// Profile and posts resolved together (concurrent strategy).
    ProfileAndPostsRetrieved { user_id: u64, posts: usize },
    /// A comments fetch is about to start.
    CommentsRequested { post_id: u64 },
    /// A comments fetch resolved and its comments were attached.
    CommentsRetrieved { post_id: u64, count: usize },
    /// A comments fetch failed; the post was given an empty list.
    CommentsFailed { post_id: u64, reason: String },
    /// The run produced an aggregate.
    Completed { strategy: Strategy, elapsed: Duration },
    /// The run was aborted by a fatal error.
    Aborted { strategy: Strategy, reason: String },
}

impl FetchEvent {
    /// The post this event refers to, if any.
    #[must_use]
    pub fn post_id(&self) -> Option<u64> {
        match self {
            Self::CommentsRequested { post_id }
            | Self::CommentsRetrieved { post_id, .. }
            | Self::CommentsFailed { post_id, .. } => Some(*post_id),
            _ => None,
        }
    }
}

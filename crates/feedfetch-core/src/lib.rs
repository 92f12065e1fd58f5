//! # feedfetch-core
//!
//! Domain model and leaf fetch operations for feedfetch: users, posts,
//! comments, the `FeedSource` seam, simulated sources with injectable
//! failure policies, and the fetch event observers.

pub mod constants;
pub mod event;
pub mod failure;
pub mod model;
pub mod observer;
pub mod observers;
pub mod options;
pub mod simulated;
pub mod source;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_COMMENTS_LATENCY, DEFAULT_COMMENT_FAILURE_RATE, DEFAULT_POSTS_LATENCY,
    DEFAULT_PROFILE_LATENCY, DEFAULT_USER_ID,
};
pub use event::{FetchEvent, Strategy};
pub use failure::{FailurePolicy, NeverFail, RandomCommentFailure, ScriptedFailure};
pub use model::{AggregateResult, Comment, Post, User};
pub use observer::{EventSubject, FetchObserver};
pub use observers::{LoggingObserver, NoOpObserver, RecordingObserver};
pub use options::{FetchOptions, Latencies};
pub use simulated::SimulatedSource;
pub use source::{FeedSource, FetchError, FetchTarget};

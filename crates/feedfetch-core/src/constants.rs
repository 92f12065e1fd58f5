//! Default latencies, failure rates, and fixture values.

use std::time::Duration;

/// Simulated latency of a profile fetch.
pub const DEFAULT_PROFILE_LATENCY: Duration = Duration::from_millis(1000);

/// Simulated latency of a posts fetch.
pub const DEFAULT_POSTS_LATENCY: Duration = Duration::from_millis(1500);

/// Simulated latency of a comments fetch.
pub const DEFAULT_COMMENTS_LATENCY: Duration = Duration::from_millis(2000);

/// Probability that a single comments fetch fails.
pub const DEFAULT_COMMENT_FAILURE_RATE: f64 = 0.3;

/// User fetched by both triggers.
pub const DEFAULT_USER_ID: u64 = 1;

/// Reason reported by a failed comments fetch.
pub const COMMENTS_FAILURE_REASON: &str = "Failed to fetch comments";

/// Reason reported by a failed profile fetch.
pub const PROFILE_FAILURE_REASON: &str = "Failed to fetch user profile";

/// Reason reported by a failed posts fetch.
pub const POSTS_FAILURE_REASON: &str = "Failed to fetch user posts";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A profile or posts fetch failed and aborted the run.
    pub const ERROR_FETCH: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

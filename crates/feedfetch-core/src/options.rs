//! Fetch options and configuration.

use std::time::Duration;

use crate::constants::{
    DEFAULT_COMMENTS_LATENCY, DEFAULT_COMMENT_FAILURE_RATE, DEFAULT_POSTS_LATENCY,
    DEFAULT_PROFILE_LATENCY,
};
use crate::source::FetchError;

/// Simulated latency of each leaf operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latencies {
    pub profile: Duration,
    pub posts: Duration,
    pub comments: Duration,
}

impl Default for Latencies {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE_LATENCY,
            posts: DEFAULT_POSTS_LATENCY,
            comments: DEFAULT_COMMENTS_LATENCY,
        }
    }
}

impl Latencies {
    /// No simulated delay at all.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            profile: Duration::ZERO,
            posts: Duration::ZERO,
            comments: Duration::ZERO,
        }
    }

    /// Expected wall-clock time of a sequential run over `posts` posts.
    #[must_use]
    pub fn sequential_estimate(&self, posts: u32) -> Duration {
        self.profile + self.posts + self.comments * posts
    }

    /// Expected wall-clock time of a concurrent run over `posts` posts.
    #[must_use]
    pub fn concurrent_estimate(&self, posts: u32) -> Duration {
        let fan_out = if posts == 0 {
            Duration::ZERO
        } else {
            self.comments
        };
        self.profile.max(self.posts) + fan_out
    }
}

/// Options for building a simulated source.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Per-operation latencies.
    pub latencies: Latencies,
    /// Probability that a single comments fetch fails.
    pub comment_failure_rate: f64,
    /// Seed for the failure generator (`None` = OS entropy).
    pub seed: Option<u64>,
    /// Posts whose comments fetch always fails.
    pub forced_comment_failures: Vec<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            latencies: Latencies::default(),
            comment_failure_rate: DEFAULT_COMMENT_FAILURE_RATE,
            seed: None,
            forced_comment_failures: Vec::new(),
        }
    }
}

impl FetchOptions {
    /// Options for deterministic runs: no delay and no random failures.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            latencies: Latencies::zero(),
            comment_failure_rate: 0.0,
            ..Self::default()
        }
    }

    /// Check that the options describe a usable source.
    pub fn validate(&self) -> Result<(), FetchError> {
        if !(0.0..=1.0).contains(&self.comment_failure_rate) {
            return Err(FetchError::Config(format!(
                "failure rate {} is outside [0, 1]",
                self.comment_failure_rate
            )));
        }
        Ok(())
    }
}

//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use feedfetch_core::constants::{DEFAULT_COMMENT_FAILURE_RATE, DEFAULT_USER_ID};
use feedfetch_core::options::{FetchOptions, Latencies};
use feedfetch_core::source::FetchError;

/// feedfetch: fetch a user's profile, posts, and comments sequentially or
/// in parallel, isolating per-post comment failures.
#[derive(Parser, Debug)]
#[command(name = "feedfetch", version, about)]
pub struct AppConfig {
    /// User whose profile, posts, and comments are fetched.
    #[arg(short, long, default_value_t = DEFAULT_USER_ID, env = "FEEDFETCH_USER_ID")]
    pub user_id: u64,

    /// Strategy to run: sequential, parallel, or all.
    #[arg(short, long, default_value = "all", env = "FEEDFETCH_MODE")]
    pub mode: String,

    /// Simulated profile latency (e.g., "1000ms", "1s").
    #[arg(long, default_value = "1000ms")]
    pub profile_latency: String,

    /// Simulated posts latency.
    #[arg(long, default_value = "1500ms")]
    pub posts_latency: String,

    /// Simulated comments latency, per post.
    #[arg(long, default_value = "2000ms")]
    pub comments_latency: String,

    /// Probability that a single comments fetch fails.
    #[arg(long, default_value_t = DEFAULT_COMMENT_FAILURE_RATE)]
    pub failure_rate: f64,

    /// Seed for the simulated failure generator.
    #[arg(long, env = "FEEDFETCH_SEED")]
    pub seed: Option<u64>,

    /// Force the comments fetch of this post to fail (repeatable).
    #[arg(long = "fail-post", value_name = "POST_ID")]
    pub fail_posts: Vec<u64>,

    /// Print the aggregate as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (rendered output only, no summaries).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose diagnostics.
    #[arg(short, long)]
    pub verbose: bool,

    /// Clear the terminal before each rendering.
    #[arg(long)]
    pub clear: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build validated fetch options from the flags.
    pub fn fetch_options(&self) -> Result<FetchOptions, FetchError> {
        let opts = FetchOptions {
            latencies: Latencies {
                profile: latency(&self.profile_latency, "profile")?,
                posts: latency(&self.posts_latency, "posts")?,
                comments: latency(&self.comments_latency, "comments")?,
            },
            comment_failure_rate: self.failure_rate,
            seed: self.seed,
            forced_comment_failures: self.fail_posts.clone(),
        };
        opts.validate()?;
        Ok(opts)
    }
}

fn latency(value: &str, what: &str) -> Result<Duration, FetchError> {
    parse_duration(value)
        .ok_or_else(|| FetchError::Config(format!("invalid {what} latency: {value:?}")))
}

/// Parse a duration string like "500ms", "2s", "1m". Bare numbers are milliseconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_millis(n))
    }
}

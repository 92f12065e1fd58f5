//! Simulated feed source with fixed fixtures, configurable latency, and an
//! injected failure policy.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::constants::{COMMENTS_FAILURE_REASON, POSTS_FAILURE_REASON, PROFILE_FAILURE_REASON};
use crate::failure::{FailurePolicy, NeverFail, RandomCommentFailure, ScriptedFailure};
use crate::model::{Comment, Post, User};
use crate::options::{FetchOptions, Latencies};
use crate::source::{FeedSource, FetchError, FetchTarget};

/// Post fixtures: (post id, title, content).
const POST_FIXTURES: [(u64, &str, &str); 3] = [
    (1, "My First Post", "Hello world!"),
    (2, "Learning JS", "Promises are cool."),
    (3, "Async Fun", "Async/Await rocks!"),
];

/// Comment fixtures: (comment id, username, text).
const COMMENT_FIXTURES: [(u64, &str, &str); 2] = [
    (1, "Alice", "Nice post!"),
    (2, "Bob", "Thanks for sharing!"),
];

/// In-process stand-in for a remote feed service.
///
/// Every call sleeps for its configured latency, then consults the failure
/// policy. Calls share no mutable state apart from the policy itself.
#[derive(Clone)]
pub struct SimulatedSource {
    latencies: Latencies,
    policy: Arc<dyn FailurePolicy>,
}

impl SimulatedSource {
    /// Create a source with the given latencies and failure policy.
    #[must_use]
    pub fn new(latencies: Latencies, policy: Arc<dyn FailurePolicy>) -> Self {
        Self { latencies, policy }
    }

    /// Create a source that never fails.
    #[must_use]
    pub fn reliable(latencies: Latencies) -> Self {
        Self::new(latencies, Arc::new(NeverFail))
    }

    /// Build a source from options: random comment failures at the
    /// configured rate, plus any forced comment failures.
    pub fn from_options(opts: &FetchOptions) -> Result<Self, FetchError> {
        opts.validate()?;

        let random = match opts.seed {
            Some(seed) => RandomCommentFailure::seeded(opts.comment_failure_rate, seed)?,
            None => RandomCommentFailure::new(opts.comment_failure_rate)?,
        };

        let policy: Arc<dyn FailurePolicy> = if opts.forced_comment_failures.is_empty() {
            Arc::new(random)
        } else {
            let forced = ScriptedFailure::comments_of(opts.forced_comment_failures.iter().copied());
            let policies: Vec<Box<dyn FailurePolicy>> = vec![Box::new(forced), Box::new(random)];
            Arc::new(policies)
        };

        Ok(Self::new(opts.latencies, policy))
    }

    #[must_use]
    pub fn latencies(&self) -> Latencies {
        self.latencies
    }

    async fn simulate(&self, latency: Duration, target: FetchTarget) -> bool {
        trace!(%target, ?latency, "Simulated fetch started");
        tokio::time::sleep(latency).await;
        let failed = self.policy.should_fail(target);
        trace!(%target, failed, "Simulated fetch finished");
        failed
    }
}

#[async_trait]
impl FeedSource for SimulatedSource {
    async fn fetch_user_profile(&self, user_id: u64) -> Result<User, FetchError> {
        if self
            .simulate(self.latencies.profile, FetchTarget::Profile(user_id))
            .await
        {
            return Err(FetchError::Profile {
                user_id,
                reason: PROFILE_FAILURE_REASON.to_string(),
            });
        }

        Ok(User {
            id: user_id,
            name: "Nicole Nigro".to_string(),
            email: "nicole@example.com".to_string(),
            username: "niclanigro".to_string(),
        })
    }

    async fn fetch_user_posts(&self, user_id: u64) -> Result<Vec<Post>, FetchError> {
        if self
            .simulate(self.latencies.posts, FetchTarget::Posts(user_id))
            .await
        {
            return Err(FetchError::Posts {
                user_id,
                reason: POSTS_FAILURE_REASON.to_string(),
            });
        }

        Ok(POST_FIXTURES
            .iter()
            .map(|&(post_id, title, content)| Post::new(post_id, user_id, title, content))
            .collect())
    }

    async fn fetch_post_comments(&self, post_id: u64) -> Result<Vec<Comment>, FetchError> {
        if self
            .simulate(self.latencies.comments, FetchTarget::Comments(post_id))
            .await
        {
            return Err(FetchError::Comments {
                post_id,
                reason: COMMENTS_FAILURE_REASON.to_string(),
            });
        }

        Ok(COMMENT_FIXTURES
            .iter()
            .map(|&(comment_id, username, comment)| Comment {
                comment_id,
                post_id,
                username: username.to_string(),
                comment: comment.to_string(),
            })
            .collect())
    }
}

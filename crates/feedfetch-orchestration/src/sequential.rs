//! Sequential orchestration: every fetch awaited before the next starts.
//!
//! Wall-clock time is profile + posts + the sum of every comments fetch.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use feedfetch_core::event::{FetchEvent, Strategy};
use feedfetch_core::model::AggregateResult;
use feedfetch_core::observer::FetchObserver;
use feedfetch_core::source::{FeedSource, FetchError};

use crate::isolation::resolve_comments;
use crate::orchestrator::Orchestrator;

/// Fetches profile, then posts, then each post's comments in post order.
pub struct SequentialOrchestrator {
    source: Arc<dyn FeedSource>,
    observer: Arc<dyn FetchObserver>,
}

impl SequentialOrchestrator {
    #[must_use]
    pub fn new(source: Arc<dyn FeedSource>, observer: Arc<dyn FetchObserver>) -> Self {
        Self { source, observer }
    }
}

#[async_trait]
impl Orchestrator for SequentialOrchestrator {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    async fn fetch(&self, user_id: u64) -> Result<AggregateResult, FetchError> {
        let user = self.source.fetch_user_profile(user_id).await?;
        self.observer
            .on_event(&FetchEvent::ProfileRetrieved { user_id });

        let mut posts = self.source.fetch_user_posts(user_id).await?;
        self.observer.on_event(&FetchEvent::PostsRetrieved {
            user_id,
            count: posts.len(),
        });

        // Post k+1 is not requested until post k has settled.
        for post in &mut posts {
            let settled =
                resolve_comments(self.source.as_ref(), self.observer.as_ref(), post).await;
            debug!(post_id = post.post_id, ?settled, "Post settled");
        }

        AggregateResult::assemble(user, posts)
    }
}

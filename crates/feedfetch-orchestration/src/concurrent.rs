//! Concurrent orchestration.
//!
//! Profile and posts are fetched together and fail fast. Once posts are in,
//! every post's comments fetch starts in the same scheduling turn and the
//! aggregate is built only after all of them have settled. On a
//! current-thread runtime this is interleaving, not parallelism.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::debug;

use feedfetch_core::event::{FetchEvent, Strategy};
use feedfetch_core::model::AggregateResult;
use feedfetch_core::observer::FetchObserver;
use feedfetch_core::source::{FeedSource, FetchError};

use crate::isolation::resolve_comments;
use crate::orchestrator::Orchestrator;

/// Overlaps profile with posts, then fans out all comments fetches.
pub struct ConcurrentOrchestrator {
    source: Arc<dyn FeedSource>,
    observer: Arc<dyn FetchObserver>,
}

impl ConcurrentOrchestrator {
    #[must_use]
    pub fn new(source: Arc<dyn FeedSource>, observer: Arc<dyn FetchObserver>) -> Self {
        Self { source, observer }
    }
}

#[async_trait]
impl Orchestrator for ConcurrentOrchestrator {
    fn strategy(&self) -> Strategy {
        Strategy::Concurrent
    }

    async fn fetch(&self, user_id: u64) -> Result<AggregateResult, FetchError> {
        let source = self.source.as_ref();
        let observer = self.observer.as_ref();

        let (user, mut posts) = tokio::try_join!(
            source.fetch_user_profile(user_id),
            source.fetch_user_posts(user_id),
        )?;
        observer.on_event(&FetchEvent::ProfileAndPostsRetrieved {
            user_id,
            posts: posts.len(),
        });

        // Each future borrows a distinct post, so no two writers share one.
        let settled = join_all(
            posts
                .iter_mut()
                .map(|post| resolve_comments(source, observer, post)),
        )
        .await;

        let isolated = settled.iter().filter(|s| s.is_isolated()).count();
        debug!(posts = settled.len(), isolated, "All comment fetches settled");

        AggregateResult::assemble(user, posts)
    }
}

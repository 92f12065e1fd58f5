//! Per-post failure isolation.
//!
//! `resolve_comments` is the single boundary where a failed fetch turns into
//! degraded success: the post gets an empty comment list and the failure is
//! reported to the observer. It always resolves.

use feedfetch_core::event::FetchEvent;
use feedfetch_core::model::Post;
use feedfetch_core::observer::FetchObserver;
use feedfetch_core::source::{FeedSource, FetchError};

/// How a post's comments settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// The fetch succeeded and this many comments were attached.
    Fetched(usize),
    /// The fetch failed; an empty list was attached instead.
    Isolated(FetchError),
}

impl Settled {
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        matches!(self, Self::Isolated(_))
    }
}

/// Fetch and attach the comments of `post`, absorbing any failure.
///
/// Only `post` is written, exactly once.
pub async fn resolve_comments(
    source: &dyn FeedSource,
    observer: &dyn FetchObserver,
    post: &mut Post,
) -> Settled {
    let post_id = post.post_id;
    observer.on_event(&FetchEvent::CommentsRequested { post_id });

    match source.fetch_post_comments(post_id).await {
        Ok(comments) => {
            let count = comments.len();
            post.attach_comments(comments);
            observer.on_event(&FetchEvent::CommentsRetrieved { post_id, count });
            Settled::Fetched(count)
        }
        Err(err) => {
            post.attach_comments(Vec::new());
            observer.on_event(&FetchEvent::CommentsFailed {
                post_id,
                reason: err.to_string(),
            });
            Settled::Isolated(err)
        }
    }
}

//! Concrete observer implementations.

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::event::FetchEvent;
use crate::observer::FetchObserver;

/// Observer that turns fetch events into tracing diagnostics.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FetchObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::ProfileRetrieved { user_id } => {
                info!(user_id, "User profile retrieved");
            }
            FetchEvent::PostsRetrieved { user_id, count } => {
                info!(user_id, count, "Posts retrieved");
            }
            FetchEvent::ProfileAndPostsRetrieved { user_id, posts } => {
                info!(user_id, posts, "User and posts retrieved simultaneously");
            }
            FetchEvent::CommentsRequested { post_id } => {
                debug!(post_id, "Fetching comments");
            }
            FetchEvent::CommentsRetrieved { post_id, count } => {
                info!(count, "Comments retrieved for post {post_id}");
            }
            FetchEvent::CommentsFailed { post_id, reason } => {
                error!(post_id, "{reason}");
            }
            FetchEvent::Completed { strategy, elapsed } => {
                info!(
                    "{strategy} fetch took {}ms",
                    elapsed.as_millis() as u64
                );
            }
            FetchEvent::Aborted { strategy, reason } => {
                error!("Error in {} fetch: {reason}", strategy.label().to_lowercase());
            }
        }
    }
}

/// Null object pattern: discards every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchObserver for NoOpObserver {
    fn on_event(&self, _event: &FetchEvent) {}
}

/// Observer that keeps every event in arrival order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<FetchEvent>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Post ids of the recorded comments failures, in order.
    #[must_use]
    pub fn failed_posts(&self) -> Vec<u64> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                FetchEvent::CommentsFailed { post_id, .. } => Some(*post_id),
                _ => None,
            })
            .collect()
    }
}

impl FetchObserver for RecordingObserver {
    fn on_event(&self, event: &FetchEvent) {
        self.events.lock().push(event.clone());
    }
}

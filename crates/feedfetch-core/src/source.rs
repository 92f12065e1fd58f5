//! The `FeedSource` seam and the fetch error type.
//!
//! `FeedSource` is the public trait consumed by orchestration. Each method is
//! one leaf operation: it suspends for its latency and then yields a value or
//! a `FetchError`. Comments failures are absorbed per post by orchestration;
//! any other failure aborts the run.

use std::fmt;

use async_trait::async_trait;

use crate::model::{Comment, Post, User};

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The profile fetch failed.
    #[error("profile fetch failed for user {user_id}: {reason}")]
    Profile { user_id: u64, reason: String },

    /// The posts fetch failed.
    #[error("posts fetch failed for user {user_id}: {reason}")]
    Posts { user_id: u64, reason: String },

    /// The comments fetch for one post failed.
    #[error("{reason}")]
    Comments { post_id: u64, reason: String },

    /// An aggregate was assembled before this post's comments settled.
    #[error("comments for post {0} never settled")]
    Unresolved(u64),

    /// Invalid options.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Identifies a single leaf operation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    Profile(u64),
    Posts(u64),
    Comments(u64),
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(id) => write!(f, "profile of user {id}"),
            Self::Posts(id) => write!(f, "posts of user {id}"),
            Self::Comments(id) => write!(f, "comments of post {id}"),
        }
    }
}

/// Asynchronous source of users, posts, and comments.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the profile of `user_id`.
    async fn fetch_user_profile(&self, user_id: u64) -> Result<User, FetchError>;

    /// Fetch the posts of `user_id`, in publication order, without comments.
    async fn fetch_user_posts(&self, user_id: u64) -> Result<Vec<Post>, FetchError>;

    /// Fetch the comments of `post_id`, in order.
    async fn fetch_post_comments(&self, post_id: u64) -> Result<Vec<Comment>, FetchError>;
}

//! Domain model: users, posts, comments, and the aggregate handed to sinks.
//!
//! Everything here is request-scoped. A `Post` leaves the posts fetch with no
//! comments and has them attached exactly once by the isolation wrapper; an
//! `AggregateResult` can only be assembled once every post is resolved.

use serde::{Deserialize, Serialize};

use crate::source::FetchError;

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: u64,
    pub post_id: u64,
    pub username: String,
    pub comment: String,
}

/// A post, with comments once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: u64,
    pub user_id: u64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments: Option<Vec<Comment>>,
}

impl Post {
    /// Create a post whose comments are not fetched yet.
    #[must_use]
    pub fn new(
        post_id: u64,
        user_id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            user_id,
            title: title.into(),
            content: content.into(),
            comments: None,
        }
    }

    /// Attach the resolved comments. Must be called at most once per post.
    pub fn attach_comments(&mut self, comments: Vec<Comment>) {
        debug_assert!(
            self.comments.is_none(),
            "comments for post {} attached twice",
            self.post_id
        );
        self.comments = Some(comments);
    }

    /// Resolved comments, or `None` while the comments fetch is outstanding.
    #[must_use]
    pub fn comments(&self) -> Option<&[Comment]> {
        self.comments.as_deref()
    }

    /// Whether comments have been attached (possibly empty).
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.comments.is_some()
    }
}

/// The user together with every post and its resolved comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    user: User,
    posts: Vec<Post>,
}

impl AggregateResult {
    /// Assemble the aggregate once all posts have settled.
    ///
    /// Fails with [`FetchError::Unresolved`] naming the first post whose
    /// comments were never attached.
    pub fn assemble(user: User, posts: Vec<Post>) -> Result<Self, FetchError> {
        if let Some(pending) = posts.iter().find(|p| !p.is_resolved()) {
            return Err(FetchError::Unresolved(pending.post_id));
        }
        Ok(Self { user, posts })
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Total number of comments across all posts.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.posts
            .iter()
            .map(|p| p.comments().map_or(0, <[Comment]>::len))
            .sum()
    }
}

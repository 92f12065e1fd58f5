//! Rendering-agnostic view of an aggregate.
//!
//! `render` is a pure function from an `AggregateResult` to a flat list of
//! nodes. Sinks decide how (or whether) to paint them.

use serde::Serialize;

use feedfetch_core::model::AggregateResult;

/// One element of the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    /// `User: <name> (<username>)`.
    UserHeading { name: String, username: String },
    /// `Email: <email>`.
    Email { email: String },
    /// A post title.
    PostTitle { title: String },
    /// A post body.
    PostContent { content: String },
    /// A post's comments as `<username>: <comment>` lines (may be empty).
    CommentList { items: Vec<String> },
}

/// Render an aggregate into nodes: the user block, then each post in order.
#[must_use]
pub fn render(aggregate: &AggregateResult) -> Vec<RenderNode> {
    let user = aggregate.user();
    let mut nodes = vec![
        RenderNode::UserHeading {
            name: user.name.clone(),
            username: user.username.clone(),
        },
        RenderNode::Email {
            email: user.email.clone(),
        },
    ];

    for post in aggregate.posts() {
        nodes.push(RenderNode::PostTitle {
            title: post.title.clone(),
        });
        nodes.push(RenderNode::PostContent {
            content: post.content.clone(),
        });
        if let Some(comments) = post.comments() {
            nodes.push(RenderNode::CommentList {
                items: comments
                    .iter()
                    .map(|c| format!("{}: {}", c.username, c.comment))
                    .collect(),
            });
        }
    }

    nodes
}

/// Plain-text rendering of nodes, one line per element.
#[must_use]
pub fn to_text(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderNode::UserHeading { name, username } => {
                out.push_str(&format!("User: {name} ({username})\n"));
            }
            RenderNode::Email { email } => out.push_str(&format!("Email: {email}\n")),
            RenderNode::PostTitle { title } => out.push_str(&format!("\n{title}\n")),
            RenderNode::PostContent { content } => out.push_str(&format!("{content}\n")),
            RenderNode::CommentList { items } => {
                for item in items {
                    out.push_str(&format!("  - {item}\n"));
                }
            }
        }
    }
    out
}

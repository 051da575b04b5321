//! GraphQL object types.

use async_graphql::{ID, SimpleObject};
use chrono::{DateTime, Utc};

use forum_core::domain::{Comment, Post};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Post")]
pub struct PostObject {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub comments_enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self {
            id: ID(post.id),
            title: post.title,
            content: post.content,
            comments_enabled: post.comments_enabled,
            created_at: post.created_at,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Comment")]
pub struct CommentObject {
    pub id: ID,
    pub post_id: ID,
    /// Comment this one replies to, if any.
    pub parent_id: Option<ID>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentObject {
    fn from(comment: Comment) -> Self {
        Self {
            id: ID(comment.id),
            post_id: ID(comment.post_id),
            parent_id: comment.parent_id.map(ID),
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_id, timestamp_now};

/// Comment entity - a reply attached to a post.
///
/// `parent_id` tags the comment as a reply to another comment. Only the single
/// reference is stored; threads are never materialized as trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(rename = "postID")]
    pub post_id: String,
    #[serde(rename = "parentID")]
    pub parent_id: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a generated ID and creation timestamp.
    pub fn new(post_id: impl Into<String>, parent_id: Option<String>, content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            post_id: post_id.into(),
            parent_id,
            content: content.into(),
            created_at: timestamp_now(),
        }
    }

    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Outcome of a comment creation attempt.
///
/// The two rejection variants are preconditions, not failures: backend
/// failures travel in the surrounding `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentCreation {
    Created(Comment),
    PostNotFound,
    CommentsDisabled,
}

impl CommentCreation {
    /// Collapse into the legacy "comment or nothing" shape.
    pub fn into_comment(self) -> Option<Comment> {
        match self {
            CommentCreation::Created(comment) => Some(comment),
            CommentCreation::PostNotFound | CommentCreation::CommentsDisabled => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CommentCreation::Created(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_flag() {
        let top = Comment::new("post-1", None, "hi");
        let reply = Comment::new("post-1", Some(top.id.clone()), "re: hi");

        assert!(!top.is_reply());
        assert!(reply.is_reply());
        assert_ne!(top.id, reply.id);
    }

    #[test]
    fn test_into_comment_collapses_rejections() {
        let comment = Comment::new("post-1", None, "hi");

        assert_eq!(
            CommentCreation::Created(comment.clone()).into_comment(),
            Some(comment)
        );
        assert_eq!(CommentCreation::PostNotFound.into_comment(), None);
        assert_eq!(CommentCreation::CommentsDisabled.into_comment(), None);
    }

    #[test]
    fn test_serializes_legacy_field_names() {
        let comment = Comment::new("post-1", None, "hi");
        let json = serde_json::to_value(&comment).unwrap();

        assert_eq!(json["postID"], "post-1");
        assert!(json["parentID"].is_null());
    }
}

//! In-memory storage backend - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use forum_core::domain::{Comment, CommentCreation, Post};
use forum_core::error::StorageError;
use forum_core::ports::{Pagination, Storage, StorageKind};

/// Everything behind the single lock. Posts and comments are not
/// independently lockable.
#[derive(Default)]
struct MemoryState {
    posts: HashMap<String, Post>,
    comments: HashMap<String, Comment>,
    /// Post IDs in creation order.
    post_order: Vec<String>,
    /// Comment IDs per post, in creation order.
    comments_by_post: HashMap<String, Vec<String>>,
}

/// In-memory storage using HashMaps behind one async RwLock.
///
/// Listings come back in the same order as the relational backend: posts
/// newest first, comments oldest first.
/// Note: Data is lost on process restart.
pub struct InMemoryStorage {
    state: RwLock<MemoryState>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_post(
        &self,
        title: &str,
        content: &str,
        comments_enabled: bool,
    ) -> Result<Post, StorageError> {
        let mut state = self.state.write().await;

        let post = Post::new(title, content, comments_enabled);
        state.post_order.push(post.id.clone());
        state.posts.insert(post.id.clone(), post.clone());

        Ok(post)
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, StorageError> {
        let state = self.state.read().await;
        Ok(state.posts.get(id).cloned())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, StorageError> {
        let state = self.state.read().await;

        Ok(state
            .post_order
            .iter()
            .rev()
            .filter_map(|id| state.posts.get(id))
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        content: &str,
    ) -> Result<CommentCreation, StorageError> {
        // Held across the check and the insert.
        let mut state = self.state.write().await;

        match state.posts.get(post_id) {
            None => return Ok(CommentCreation::PostNotFound),
            Some(post) if !post.comments_enabled => return Ok(CommentCreation::CommentsDisabled),
            Some(_) => {}
        }

        // Parent IDs are stored as given, even if no such comment exists.
        let comment = Comment::new(post_id, parent_id.map(str::to_owned), content);
        state
            .comments_by_post
            .entry(post_id.to_owned())
            .or_default()
            .push(comment.id.clone());
        state.comments.insert(comment.id.clone(), comment.clone());

        Ok(CommentCreation::Created(comment))
    }

    async fn get_comments(
        &self,
        post_id: &str,
        page: Pagination,
    ) -> Result<Vec<Comment>, StorageError> {
        let state = self.state.read().await;

        let Some(ids) = state.comments_by_post.get(post_id) else {
            return Ok(Vec::new());
        };

        Ok(page
            .slice(ids)
            .iter()
            .filter_map(|id| state.comments.get(id))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Memory
    }
}

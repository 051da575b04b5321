//! Per-call deadline enforcement for any storage backend.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use forum_core::domain::{Comment, CommentCreation, Post};
use forum_core::error::StorageError;
use forum_core::ports::{Pagination, Storage, StorageKind};

/// Wraps a backend so every call fails with [`StorageError::Timeout`] once
/// the deadline passes. The in-flight future is dropped at that point, which
/// cancels the underlying query or lock wait.
pub struct DeadlineStorage {
    inner: Arc<dyn Storage>,
    deadline: Duration,
}

impl DeadlineStorage {
    pub fn new(inner: Arc<dyn Storage>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    async fn within<F, T>(&self, future: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>> + Send,
    {
        timeout(self.deadline, future)
            .await
            .map_err(|_| StorageError::Timeout(self.deadline))?
    }
}

#[async_trait]
impl Storage for DeadlineStorage {
    async fn create_post(
        &self,
        title: &str,
        content: &str,
        comments_enabled: bool,
    ) -> Result<Post, StorageError> {
        self.within(self.inner.create_post(title, content, comments_enabled))
            .await
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, StorageError> {
        self.within(self.inner.get_post(id)).await
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, StorageError> {
        self.within(self.inner.get_all_posts()).await
    }

    async fn create_comment(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        content: &str,
    ) -> Result<CommentCreation, StorageError> {
        self.within(self.inner.create_comment(post_id, parent_id, content))
            .await
    }

    async fn get_comments(
        &self,
        post_id: &str,
        page: Pagination,
    ) -> Result<Vec<Comment>, StorageError> {
        self.within(self.inner.get_comments(post_id, page)).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.within(self.inner.ping()).await
    }

    fn kind(&self) -> StorageKind {
        self.inner.kind()
    }
}

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::domain::{Comment, CommentCreation, Post};
use crate::error::StorageError;

/// Default page size for comment listings.
pub const DEFAULT_COMMENT_LIMIT: u64 = 10;

/// Window over a comment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Fill unset values with the defaults (limit 10, offset 0).
    pub fn from_optional(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_COMMENT_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    /// The page following this one.
    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    /// Apply the window to an in-memory sequence.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX);
        if start >= len {
            return &[];
        }
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(len);
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_optional(None, None)
    }
}

/// Which backend is serving the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Postgres,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Memory => "memory",
            StorageKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" => Ok(StorageKind::Memory),
            "postgres" | "postgresql" | "relational" => Ok(StorageKind::Postgres),
            other => Err(format!(
                "unknown storage type '{other}' (expected 'memory' or 'postgres')"
            )),
        }
    }
}

/// Storage trait - the capability contract shared by every backend.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create a post; ID and timestamp are assigned by the backend.
    async fn create_post(
        &self,
        title: &str,
        content: &str,
        comments_enabled: bool,
    ) -> Result<Post, StorageError>;

    /// Look up a post. A missing post is `Ok(None)`.
    async fn get_post(&self, id: &str) -> Result<Option<Post>, StorageError>;

    /// All posts, newest first.
    async fn get_all_posts(&self) -> Result<Vec<Post>, StorageError>;

    /// Attach a comment to a post, provided the post exists and accepts comments.
    async fn create_comment(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        content: &str,
    ) -> Result<CommentCreation, StorageError>;

    /// One page of a post's comments, oldest first.
    async fn get_comments(
        &self,
        post_id: &str,
        page: Pagination,
    ) -> Result<Vec<Comment>, StorageError>;

    /// Liveness probe.
    async fn ping(&self) -> Result<(), StorageError>;

    fn kind(&self) -> StorageKind;
}

//! PostgreSQL storage implementation.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    TransactionTrait,
};

use forum_core::domain::{Comment, CommentCreation, Post};
use forum_core::error::StorageError;
use forum_core::ports::{Pagination, Storage, StorageKind};

use super::connections::DatabaseConfig;
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::schema;

/// PostgreSQL storage backed by a SeaORM connection pool.
pub struct PostgresStorage {
    pub(crate) db: DbConn,
}

impl PostgresStorage {
    /// Wrap an existing connection without touching the schema.
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Connect, verify the server answers, and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let db = config.connect().await.map_err(map_db_err)?;
        db.ping().await.map_err(map_db_err)?;
        schema::bootstrap(&db).await.map_err(map_db_err)?;

        Ok(Self::new(db))
    }

    pub fn connection(&self) -> &DbConn {
        &self.db
    }
}

/// Translate SeaORM errors into the storage taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> StorageError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return StorageError::Constraint(detail);
        }
        _ => {}
    }

    match err {
        DbErr::Conn(e) => StorageError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StorageError::Connection(e.to_string()),
        other => StorageError::Query(other.to_string()),
    }
}

/// Postgres binds LIMIT/OFFSET as BIGINT.
fn sql_bound(value: u64) -> u64 {
    value.min(i64::MAX as u64)
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn create_post(
        &self,
        title: &str,
        content: &str,
        comments_enabled: bool,
    ) -> Result<Post, StorageError> {
        let post = Post::new(title, content, comments_enabled);
        tracing::debug!(post_id = %post.id, "Inserting post");

        PostEntity::insert(post::ActiveModel::from(post.clone()))
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(post)
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, StorageError> {
        let result = PostEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, StorageError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create_comment(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        content: &str,
    ) -> Result<CommentCreation, StorageError> {
        // The post row stays share-locked until commit, so its
        // comments_enabled flag cannot change between check and insert.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let target = PostEntity::find_by_id(post_id.to_owned())
            .lock_shared()
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let rejection = match target {
            None => Some(CommentCreation::PostNotFound),
            Some(post) if !post.comments_enabled => Some(CommentCreation::CommentsDisabled),
            Some(_) => None,
        };
        if let Some(rejection) = rejection {
            tracing::debug!(post_id = %post_id, outcome = ?rejection, "Comment rejected");
            txn.rollback().await.map_err(map_db_err)?;
            return Ok(rejection);
        }

        let comment = Comment::new(post_id, parent_id.map(str::to_owned), content);
        tracing::debug!(post_id = %post_id, comment_id = %comment.id, "Inserting comment");

        CommentEntity::insert(comment::ActiveModel::from(comment.clone()))
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(CommentCreation::Created(comment))
    }

    async fn get_comments(
        &self,
        post_id: &str,
        page: Pagination,
    ) -> Result<Vec<Comment>, StorageError> {
        tracing::debug!(post_id = %post_id, limit = page.limit, offset = page.offset, "Listing comments");

        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .limit(sql_bound(page.limit))
            .offset(sql_bound(page.offset))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.db.ping().await.map_err(map_db_err)
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Postgres
    }
}

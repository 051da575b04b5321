use chrono::{SubsecRound, Utc};
use sea_orm::{
    DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Transaction,
};

use forum_core::domain::CommentCreation;
use forum_core::error::StorageError;
use forum_core::ports::{Pagination, Storage, StorageKind};

use super::entity::{comment, post};
use super::postgres_storage::map_db_err;
use super::{PostgresStorage, schema};

fn post_row(id: &str, comments_enabled: bool) -> post::Model {
    post::Model {
        id: id.to_owned(),
        title: "Test Post".to_owned(),
        content: "Content".to_owned(),
        comments_enabled,
        created_at: Utc::now().trunc_subsecs(6).naive_utc(),
    }
}

fn comment_row(id: &str, post_id: &str, parent_id: Option<&str>) -> comment::Model {
    comment::Model {
        id: id.to_owned(),
        post_id: post_id.to_owned(),
        parent_id: parent_id.map(str::to_owned),
        content: format!("Comment {id}"),
        created_at: Utc::now().trunc_subsecs(6).naive_utc(),
    }
}

/// Take the mock's transaction log back out of the storage, since
/// `DatabaseConnection` is not `Clone` under sea-orm's `mock` feature.
fn transaction_log(storage: PostgresStorage) -> Vec<Transaction> {
    storage.db.into_transaction_log()
}

fn inserted() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = post_row("post-1", true);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()]])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let post = storage.get_post("post-1").await.unwrap().unwrap();

    assert_eq!(post.id, "post-1");
    assert_eq!(post.title, "Test Post");
    assert!(post.comments_enabled);
    assert_eq!(post.created_at, row.created_at.and_utc());
}

#[tokio::test]
async fn test_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let storage = PostgresStorage::new(db);
    assert_eq!(storage.get_post("nonexistent-id").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_post_inserts_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([inserted()])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let post = storage.create_post("T", "C", false).await.unwrap();

    assert!(!post.id.is_empty());
    assert_eq!(post.title, "T");
    assert_eq!(post.content, "C");
    assert!(!post.comments_enabled);
    assert!(post.created_at <= Utc::now());

    let log = format!("{:?}", transaction_log(storage));
    assert!(log.contains("INSERT INTO"));
    assert!(log.contains(&post.id));
}

#[tokio::test]
async fn test_get_all_posts_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_row("b", true), post_row("a", false)]])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let posts = storage.get_all_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "b");

    let log = format!("{:?}", transaction_log(storage));
    assert!(log.contains("ORDER BY"));
    assert!(log.contains("DESC"));
}

#[tokio::test]
async fn test_get_all_posts_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let storage = PostgresStorage::new(db);
    assert!(storage.get_all_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_comment_on_open_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_row("post-1", true)]])
        .append_exec_results([inserted()])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let outcome = storage
        .create_comment("post-1", Some("parent-1"), "hi")
        .await
        .unwrap();

    let comment = match outcome {
        CommentCreation::Created(comment) => comment,
        other => panic!("expected a created comment, got {:?}", other),
    };
    assert_eq!(comment.post_id, "post-1");
    assert_eq!(comment.parent_id.as_deref(), Some("parent-1"));
    assert_eq!(comment.content, "hi");

    let log = format!("{:?}", transaction_log(storage));
    assert!(log.contains("FOR SHARE"));
    assert!(log.contains("INSERT INTO"));
}

#[tokio::test]
async fn test_create_comment_on_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let outcome = storage.create_comment("bad-id", None, "x").await.unwrap();

    assert_eq!(outcome, CommentCreation::PostNotFound);
    let log = format!("{:?}", transaction_log(storage));
    assert!(!log.contains("INSERT INTO"));
}

#[tokio::test]
async fn test_create_comment_on_closed_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_row("post-1", false)]])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let outcome = storage
        .create_comment("post-1", None, "Should not work")
        .await
        .unwrap();

    assert_eq!(outcome, CommentCreation::CommentsDisabled);
    let log = format!("{:?}", transaction_log(storage));
    assert!(!log.contains("INSERT INTO"));
}

#[tokio::test]
async fn test_get_comments_paginates_oldest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            comment_row("c4", "post-1", None),
            comment_row("c5", "post-1", Some("c4")),
        ]])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let comments = storage
        .get_comments("post-1", Pagination::new(3, 3))
        .await
        .unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].parent_id, None);
    assert_eq!(comments[1].parent_id.as_deref(), Some("c4"));

    let log = format!("{:?}", transaction_log(storage));
    assert!(log.contains("ASC"));
    assert!(log.contains("LIMIT"));
    assert!(log.contains("OFFSET"));
}

#[tokio::test]
async fn test_get_comments_clamps_window_to_bigint() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<comment::Model>::new()])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let far = Pagination::new(u64::MAX, 0).next();
    let comments = storage.get_comments("post-1", far).await.unwrap();

    assert!(comments.is_empty());
    let log = format!("{:?}", transaction_log(storage));
    assert!(log.contains(&i64::MAX.to_string()));
    assert!(!log.contains(&u64::MAX.to_string()));
}

#[tokio::test]
async fn test_bootstrap_is_repeatable() {
    let statements = schema::BOOTSTRAP_STATEMENTS.len();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results((0..statements * 2).map(|_| MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }))
        .into_connection();

    schema::bootstrap(&db).await.unwrap();
    schema::bootstrap(&db).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert_eq!(log.matches("CREATE").count(), statements * 2);
    assert_eq!(log.matches("IF NOT EXISTS").count(), statements * 2);
}

#[tokio::test]
async fn test_query_failure_propagates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation \"posts\" does not exist".to_owned())])
        .into_connection();

    let storage = PostgresStorage::new(db);
    let err = storage.get_post("post-1").await.unwrap_err();

    assert!(matches!(err, StorageError::Query(_)));
}

#[test]
fn test_connection_errors_are_classified() {
    let err = map_db_err(DbErr::Conn(RuntimeErr::Internal("connection refused".to_owned())));
    assert!(matches!(err, StorageError::Connection(_)));
    assert!(err.is_unavailable());

    let err = map_db_err(DbErr::Custom("boom".to_owned()));
    assert!(matches!(err, StorageError::Query(_)));
}

#[test]
fn test_kind_is_postgres() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    assert_eq!(PostgresStorage::new(db).kind(), StorageKind::Postgres);
}

//! Idempotent schema bootstrap for the forum tables.

use sea_orm::{ConnectionTrait, DbErr};

const CREATE_POSTS: &str = r#"
    CREATE TABLE IF NOT EXISTS posts (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        comments_enabled BOOLEAN NOT NULL,
        created_at TIMESTAMP NOT NULL
    )
"#;

const CREATE_COMMENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS comments (
        id TEXT PRIMARY KEY,
        post_id TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
        parent_id TEXT REFERENCES comments(id) ON DELETE CASCADE,
        content TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL
    )
"#;

const CREATE_POST_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id)";

const CREATE_PARENT_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_comments_parent_id ON comments(parent_id)";

/// Statements in dependency order: `comments` references `posts`.
pub const BOOTSTRAP_STATEMENTS: [&str; 4] = [
    CREATE_POSTS,
    CREATE_COMMENTS,
    CREATE_POST_ID_INDEX,
    CREATE_PARENT_ID_INDEX,
];

/// Create tables and indexes if they are missing. Safe to run repeatedly.
pub async fn bootstrap<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for statement in BOOTSTRAP_STATEMENTS {
        db.execute_unprepared(statement).await?;
    }
    tracing::info!("Forum schema ready");
    Ok(())
}

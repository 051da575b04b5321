use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(posts_table()).await?;
        manager.create_table(comments_table()).await?;
        for index in comment_indexes() {
            manager.create_index(index).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).if_exists().to_owned())
            .await
    }
}

fn posts_table() -> TableCreateStatement {
    Table::create()
        .table(Posts::Table)
        .if_not_exists()
        .col(ColumnDef::new(Posts::Id).text().not_null().primary_key())
        .col(ColumnDef::new(Posts::Title).text().not_null())
        .col(ColumnDef::new(Posts::Content).text().not_null())
        .col(ColumnDef::new(Posts::CommentsEnabled).boolean().not_null())
        .col(ColumnDef::new(Posts::CreatedAt).timestamp().not_null())
        .to_owned()
}

fn comments_table() -> TableCreateStatement {
    Table::create()
        .table(Comments::Table)
        .if_not_exists()
        .col(ColumnDef::new(Comments::Id).text().not_null().primary_key())
        .col(ColumnDef::new(Comments::PostId).text().not_null())
        .col(ColumnDef::new(Comments::ParentId).text().null())
        .col(ColumnDef::new(Comments::Content).text().not_null())
        .col(ColumnDef::new(Comments::CreatedAt).timestamp().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_comments_post_id")
                .from(Comments::Table, Comments::PostId)
                .to(Posts::Table, Posts::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_comments_parent_id")
                .from(Comments::Table, Comments::ParentId)
                .to(Comments::Table, Comments::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn comment_indexes() -> [IndexCreateStatement; 2] {
    [
        Index::create()
            .if_not_exists()
            .name("idx_comments_post_id")
            .table(Comments::Table)
            .col(Comments::PostId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_comments_parent_id")
            .table(Comments::Table)
            .col(Comments::ParentId)
            .to_owned(),
    ]
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Content,
    CommentsEnabled,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    PostId,
    ParentId,
    Content,
    CreatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_table_sql() {
        let sql = posts_table().to_string(PostgresQueryBuilder);

        assert!(sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "posts""#));
        assert!(sql.contains(r#""comments_enabled" bool NOT NULL"#));
        assert!(sql.contains(r#""created_at" timestamp NOT NULL"#));
    }

    #[test]
    fn test_comments_cascade_on_delete() {
        let sql = comments_table().to_string(PostgresQueryBuilder);

        assert_eq!(sql.matches("ON DELETE CASCADE").count(), 2);
        assert!(sql.contains(r#"REFERENCES "posts" ("id")"#));
        assert!(sql.contains(r#"REFERENCES "comments" ("id")"#));
    }

    #[test]
    fn test_indexes_are_idempotent() {
        for index in comment_indexes() {
            let sql = index.to_string(PostgresQueryBuilder);
            assert!(sql.starts_with("CREATE INDEX IF NOT EXISTS"));
        }
    }
}

//! Read-side resolvers.

use async_graphql::{Context, ID, Object, Result as GraphQLResult};

use forum_core::ports::Pagination;

use super::storage;
use super::types::{CommentObject, PostObject};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All posts, newest first.
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<PostObject>> {
        let posts = storage(ctx)?.get_all_posts().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Option<PostObject>> {
        let post = storage(ctx)?.get_post(&id).await?;
        Ok(post.map(Into::into))
    }

    /// A page of a post's comments, oldest first. Defaults: limit 10, offset 0.
    async fn comments(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> GraphQLResult<Vec<CommentObject>> {
        let page = Pagination::from_optional(
            non_negative("limit", limit)?,
            non_negative("offset", offset)?,
        );

        let comments = storage(ctx)?.get_comments(&post_id, page).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}

fn non_negative(name: &str, value: Option<i32>) -> GraphQLResult<Option<u64>> {
    value
        .map(|v| u64::try_from(v).map_err(|_| format!("{name} must not be negative").into()))
        .transpose()
}

//! Write-side resolvers.

use async_graphql::{Context, ID, Object, Result as GraphQLResult};

use forum_core::domain::CommentCreation;

use super::storage;
use super::types::{CommentObject, PostObject};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        comments_enabled: bool,
    ) -> GraphQLResult<PostObject> {
        let post = storage(ctx)?
            .create_post(&title, &content, comments_enabled)
            .await?;

        tracing::info!(post_id = %post.id, comments_enabled, "Post created");
        Ok(post.into())
    }

    /// Returns null when the post does not exist or has comments disabled.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        parent_id: Option<ID>,
        content: String,
    ) -> GraphQLResult<Option<CommentObject>> {
        let outcome = storage(ctx)?
            .create_comment(&post_id, parent_id.as_deref().map(String::as_str), &content)
            .await?;

        match &outcome {
            CommentCreation::Created(comment) => {
                tracing::info!(
                    post_id = %comment.post_id,
                    comment_id = %comment.id,
                    reply = comment.is_reply(),
                    "Comment created"
                );
            }
            rejected => {
                tracing::debug!(post_id = %post_id.as_str(), outcome = ?rejected, "Comment rejected");
            }
        }

        Ok(outcome.into_comment().map(Into::into))
    }
}

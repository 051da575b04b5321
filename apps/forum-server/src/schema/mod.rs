//! GraphQL schema for posts and threaded comments.

pub mod mutation;
pub mod query;
pub mod subscription;
pub mod types;

use std::sync::Arc;

use async_graphql::{Context, Result as GraphQLResult, Schema};

use forum_core::ports::Storage;

use mutation::MutationRoot;
use query::QueryRoot;
use subscription::SubscriptionRoot;

pub type ForumSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(storage: Arc<dyn Storage>) -> ForumSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
    .data(storage)
    .finish()
}

fn storage<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a Arc<dyn Storage>> {
    ctx.data::<Arc<dyn Storage>>()
}

//! GraphQL subscriptions.

use async_graphql::{ID, Subscription};
use futures::stream::{self, Stream};

use super::types::CommentObject;

#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Accepts subscribers but never emits: comment events are not published.
    async fn comment_added(&self, post_id: ID) -> impl Stream<Item = CommentObject> {
        tracing::debug!(post_id = %post_id.as_str(), "commentAdded subscription opened");
        stream::pending()
    }
}

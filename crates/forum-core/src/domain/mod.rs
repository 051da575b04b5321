//! Domain entities - the core business objects.

mod comment;
mod post;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

pub use comment::{Comment, CommentCreation};
pub use post::Post;

/// Generate a fresh opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current instant, truncated to the microsecond precision of a SQL `TIMESTAMP`.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

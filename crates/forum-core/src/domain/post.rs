use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_id, timestamp_now};

/// Post entity - a top-level article that owns zero or more comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub comments_enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(title: impl Into<String>, content: impl Into<String>, comments_enabled: bool) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            content: content.into(),
            comments_enabled,
            created_at: timestamp_now(),
        }
    }
}

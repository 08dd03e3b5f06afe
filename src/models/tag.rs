//! Tags and their book assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A label with an optional display color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `create_tag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagCommand {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Payload for `add_tags_to_book`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTagsToBookCommand {
    pub book_id: i64,
    pub tag_ids: Vec<i64>,
}

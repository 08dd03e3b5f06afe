//! Collections group books; membership is managed with dedicated commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named group of books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `create_collection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollectionCommand {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `update_collection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCollectionCommand {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `add_books_to_collection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBooksToCollectionCommand {
    pub collection_id: i64,
    pub book_ids: Vec<i64>,
}

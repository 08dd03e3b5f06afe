//! Book records and their command payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a book (also used for individual readings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    NotStarted,
    Reading,
    Paused,
    Abandoned,
    Completed,
    Rereading,
}

impl BookStatus {
    /// Formatted display name.
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::NotStarted => "Not Started",
            BookStatus::Reading => "Reading",
            BookStatus::Paused => "Paused",
            BookStatus::Abandoned => "Abandoned",
            BookStatus::Completed => "Completed",
            BookStatus::Rereading => "Rereading",
        }
    }
}

/// Medium of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookType {
    Paper,
    Ebook,
    Audio,
}

/// A book in the library (or on the wishlist).
///
/// `progress_percentage` is computed by the backend from the pagination or
/// audio progress fields depending on `book_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub book_type: BookType,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub total_pages: Option<i64>,
    pub total_minutes: Option<i64>,
    pub current_page_text: i64,
    pub current_minutes_audio: i64,
    pub status: BookStatus,
    pub is_archived: bool,
    pub is_wishlist: bool,
    pub cover_url: Option<String>,
    pub url: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status_changed_at: Option<DateTime<Utc>>,
    pub progress_percentage: f64,
}

/// Payload for `create_book`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookCommand {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub book_type: BookType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wishlist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
}

impl CreateBookCommand {
    /// Minimal command with only the required fields set.
    pub fn new(title: impl Into<String>, book_type: BookType) -> Self {
        Self {
            title: title.into(),
            author: None,
            genre: None,
            book_type,
            isbn: None,
            publication_year: None,
            total_pages: None,
            total_minutes: None,
            cover_url: None,
            url: None,
            is_wishlist: None,
            status: None,
        }
    }
}

/// Partial-field payload for `update_book`. Unset fields are left untouched
/// by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookCommand {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_type: Option<BookType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page_text: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_minutes_audio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wishlist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Server-side filters for `list_books`.
///
/// Boolean filters are sent whenever explicitly set (including `false`);
/// everything unset stays off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_type: Option<BookType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wishlist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<i64>,
}

impl BookQuery {
    /// The library view: everything not archived.
    pub fn library() -> Self {
        Self {
            is_archived: Some(false),
            ..Self::default()
        }
    }

    /// The wishlist view.
    pub fn wishlist() -> Self {
        Self {
            is_archived: Some(false),
            is_wishlist: Some(true),
            ..Self::default()
        }
    }

    /// The archive view.
    pub fn archive() -> Self {
        Self {
            is_archived: Some(true),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_value(BookStatus::NotStarted).unwrap(),
            json!("not_started")
        );
        assert_eq!(
            serde_json::to_value(BookStatus::Rereading).unwrap(),
            json!("rereading")
        );
    }

    #[test]
    fn test_create_command_omits_unset_fields() {
        let cmd = CreateBookCommand::new("Dune", BookType::Paper);
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value, json!({"title": "Dune", "book_type": "paper"}));
    }

    #[test]
    fn test_query_keeps_explicit_false() {
        let query = BookQuery::library();
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({"is_archived": false}));
    }

    #[test]
    fn test_book_round_trip() {
        let raw = json!({
            "id": 3,
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": null,
            "book_type": "paper",
            "isbn": null,
            "publication_year": 1965,
            "total_pages": 412,
            "total_minutes": null,
            "current_page_text": 120,
            "current_minutes_audio": 0,
            "status": "reading",
            "is_archived": false,
            "is_wishlist": false,
            "cover_url": null,
            "url": null,
            "added_at": "2026-01-02T10:00:00Z",
            "updated_at": "2026-01-10T08:30:00Z",
            "status_changed_at": null,
            "progress_percentage": 29.1
        });
        let book: Book = serde_json::from_value(raw).unwrap();
        assert_eq!(book.id, Some(3));
        assert_eq!(book.status, BookStatus::Reading);
        assert_eq!(book.status.label(), "Reading");
    }
}

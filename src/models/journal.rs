//! Journal entries: dated free-form writing, optionally tied to a book.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Option<i64>,
    pub entry_date: NaiveDate,
    pub content: String,
    pub book_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `create_journal_entry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalEntryCommand {
    pub entry_date: NaiveDate,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
}

/// Payload for `update_journal_entry`. Date and content are full
/// replacements, not partials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJournalEntryCommand {
    pub id: i64,
    pub entry_date: NaiveDate,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
}

/// Server-side filters for `list_journal_entries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

//! Readings track re-read cycles: one record per complete pass through a
//! book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::book::BookStatus;

/// One read-cycle of a book. `reading_number` 1 is the first read, 2 the
/// first reread, and so on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: Option<i64>,
    pub book_id: i64,
    pub reading_number: i64,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for `create_reading` (starts the next cycle for a book).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReadingCommand {
    pub book_id: i64,
}

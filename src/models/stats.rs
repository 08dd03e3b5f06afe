//! Backend-computed statistics and book summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::book::BookStatus;

/// Totals for the current day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayStatistics {
    pub pages_read: i64,
    pub minutes_read: i64,
    pub sessions_count: i64,
    pub duration_seconds: i64,
}

/// Totals for the current month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStatistics {
    pub pages_read: i64,
    pub minutes_read: i64,
    pub sessions_count: i64,
    pub books_completed: i64,
}

/// Snapshot of the book most recently being read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentBookStatistics {
    pub book_id: i64,
    pub title: String,
    pub author: Option<String>,
    pub cover_url: Option<String>,
    pub current_page: i64,
    pub total_pages: Option<i64>,
    pub progress_percentage: f64,
    pub status: BookStatus,
}

/// Result of `get_statistics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub today: TodayStatistics,
    pub this_month: MonthStatistics,
    pub current_book: Option<CurrentBookStatistics>,
}

/// Result of `generate_book_summary`: an overview of a book's notes and
/// highlights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub book_id: i64,
    pub book_title: String,
    pub book_author: Option<String>,
    pub total_notes: i64,
    pub total_highlights: i64,
    pub notes_summary: String,
    pub highlights_text: Vec<String>,
    pub key_themes: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

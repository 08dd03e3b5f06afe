//! AppMessage enum for async communication within the application.
//!
//! Fetch tasks never touch app state directly; they send one of these back
//! over the mpsc channel, carrying the generation token their fetch began
//! with so stale results can be dropped.

use crate::models::{Book, Collection, Session, Statistics};

/// Messages received from spawned backend fetches.
///
/// Errors arrive pre-stringified: by the time a result reaches the app it
/// is either data or a line of text for the inline error display.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Library book list loaded (or failed)
    BooksLoaded {
        generation: u64,
        result: Result<Vec<Book>, String>,
    },
    /// Collection membership loaded for one book
    MembershipLoaded {
        book_id: i64,
        result: Result<Vec<i64>, String>,
    },
    /// Collection list loaded
    CollectionsLoaded {
        generation: u64,
        result: Result<Vec<Collection>, String>,
    },
    /// Backend statistics loaded
    StatisticsLoaded {
        generation: u64,
        result: Result<Statistics, String>,
    },
    /// Today's sessions loaded
    TodaySessionsLoaded {
        generation: u64,
        result: Result<Vec<Session>, String>,
    },
    /// This week's sessions loaded
    WeekSessionsLoaded {
        generation: u64,
        result: Result<Vec<Session>, String>,
    },
    /// A finished timer session was saved to the backend
    SessionSaved { result: Result<Session, String> },
}

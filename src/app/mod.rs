//! Application state and logic for the TUI.
//!
//! Control flow is unidirectional: a key event mutates filters or starts a
//! fetch, the fetch task invokes the bridge, the result comes back as an
//! [`AppMessage`], the matching [`Remote`] cell resolves, and the next
//! render reads the stores. A fetch failure becomes an inline error string
//! on its own cell; it never touches the other screens.

mod fetch;
mod messages;

pub use fetch::SharedBridge;
pub use messages::AppMessage;

use chrono::{Datelike, Local, NaiveDate};
use tokio::sync::mpsc;

use crate::models::{
    Book, BookQuery, BookStatus, BookType, Collection, CreateSessionCommand, Session, Statistics,
};
use crate::state::{CollectionMembership, LibraryFilters, Remote, SessionTimer};

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Library,
    Session,
}

/// Core application state.
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    // Backend-loaded stores
    pub books: Remote<Vec<Book>>,
    pub collections: Remote<Vec<Collection>>,
    pub statistics: Remote<Statistics>,
    pub today_sessions: Remote<Vec<Session>>,
    pub week_sessions: Remote<Vec<Session>>,

    // Library view
    pub filters: LibraryFilters,
    pub membership: CollectionMembership,
    pub selected_book: usize,
    /// When set, printable keys go to the search filter.
    pub search_mode: bool,

    // Active session
    pub timer: SessionTimer,
    pub timer_book_id: Option<i64>,
    pub session_error: Option<String>,
    pub session_saved: bool,

    bridge: SharedBridge,
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the app and kick off the initial home-screen fetches.
    pub fn new(bridge: SharedBridge, tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let mut app = Self {
            screen: Screen::Home,
            should_quit: false,
            books: Remote::new(),
            collections: Remote::new(),
            statistics: Remote::new(),
            today_sessions: Remote::new(),
            week_sessions: Remote::new(),
            filters: LibraryFilters::default(),
            membership: CollectionMembership::new(),
            selected_book: 0,
            search_mode: false,
            timer: SessionTimer::new(),
            timer_book_id: None,
            session_error: None,
            session_saved: false,
            bridge,
            tx,
        };
        app.refresh_home();
        app
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Monday of the current week.
    fn week_start() -> NaiveDate {
        let today = Self::today();
        today - chrono::Days::new(today.weekday().num_days_from_monday() as u64)
    }

    // ------------------------------------------------------------------
    // Fetch orchestration
    // ------------------------------------------------------------------

    /// Reload everything the home screen shows.
    pub fn refresh_home(&mut self) {
        fetch::spawn_statistics(self.bridge.clone(), self.tx.clone(), self.statistics.begin());
        fetch::spawn_today_sessions(
            self.bridge.clone(),
            self.tx.clone(),
            self.today_sessions.begin(),
            Self::today(),
        );
        fetch::spawn_week_sessions(
            self.bridge.clone(),
            self.tx.clone(),
            self.week_sessions.begin(),
            Self::week_start(),
            Self::today(),
        );
    }

    /// Reload the library book list (and the collection list for the
    /// filter bar). Membership is re-derived from the fresh list.
    pub fn refresh_library(&mut self) {
        self.membership.clear();
        fetch::spawn_list_books(
            self.bridge.clone(),
            self.tx.clone(),
            self.books.begin(),
            BookQuery::library(),
        );
        fetch::spawn_list_collections(
            self.bridge.clone(),
            self.tx.clone(),
            self.collections.begin(),
        );
    }

    // ------------------------------------------------------------------
    // Navigation and filters
    // ------------------------------------------------------------------

    pub fn go_to(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        // Fetch on entry, like the pages the screens replace
        match screen {
            Screen::Home => self.refresh_home(),
            Screen::Library => self.refresh_library(),
            Screen::Session => {}
        }
    }

    /// Cycle the status filter through all statuses and back to none.
    pub fn cycle_status_filter(&mut self) {
        const ORDER: [BookStatus; 6] = [
            BookStatus::NotStarted,
            BookStatus::Reading,
            BookStatus::Paused,
            BookStatus::Abandoned,
            BookStatus::Completed,
            BookStatus::Rereading,
        ];
        self.filters.status = match self.filters.status {
            None => Some(ORDER[0]),
            Some(current) => ORDER
                .iter()
                .position(|s| *s == current)
                .and_then(|i| ORDER.get(i + 1))
                .copied(),
        };
        self.selected_book = 0;
    }

    /// Cycle the type filter paper → ebook → audio → none.
    pub fn cycle_type_filter(&mut self) {
        self.filters.book_type = match self.filters.book_type {
            None => Some(BookType::Paper),
            Some(BookType::Paper) => Some(BookType::Ebook),
            Some(BookType::Ebook) => Some(BookType::Audio),
            Some(BookType::Audio) => None,
        };
        self.selected_book = 0;
    }

    /// Cycle the collection filter through the loaded collections.
    pub fn cycle_collection_filter(&mut self) {
        let ids: Vec<i64> = self.collections.items().iter().filter_map(|c| c.id).collect();
        let next = match self.filters.collection {
            None => ids.first().copied(),
            Some(current) => ids
                .iter()
                .position(|id| *id == current)
                .and_then(|i| ids.get(i + 1))
                .copied(),
        };
        self.set_collection_filter(next);
    }

    /// Set the collection filter and start membership lookups for any
    /// listed book not yet in the map. Until a book's lookup lands it
    /// stays provisionally visible.
    pub fn set_collection_filter(&mut self, collection_id: Option<i64>) {
        self.filters.collection = collection_id;
        self.selected_book = 0;
        if collection_id.is_none() {
            return;
        }
        for book in self.books.items() {
            if let Some(book_id) = book.id {
                if !self.membership.is_loaded(book_id) {
                    fetch::spawn_membership(self.bridge.clone(), self.tx.clone(), book_id);
                }
            }
        }
    }

    pub fn push_search(&mut self, c: char) {
        self.filters.search.push(c);
        self.selected_book = 0;
    }

    pub fn pop_search(&mut self) {
        self.filters.search.pop();
        self.selected_book = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.selected_book = 0;
    }

    // ------------------------------------------------------------------
    // Active session
    // ------------------------------------------------------------------

    /// Start timing a session against the currently selected book.
    pub fn start_session(&mut self, book_id: i64) {
        self.timer_book_id = Some(book_id);
        self.session_error = None;
        self.session_saved = false;
        self.timer.start();
        self.screen = Screen::Session;
    }

    /// Stop the timer and save the session. Whole minutes only; a session
    /// under a minute is still logged as one minute so it counts.
    pub fn finish_session(&mut self) {
        let Some(book_id) = self.timer_book_id else {
            return;
        };
        let elapsed = self.timer.stop();
        let minutes = (elapsed / 60).max(1) as i64;
        let mut command = CreateSessionCommand::new(book_id, Self::today());
        command.minutes_read = Some(minutes);
        fetch::spawn_save_session(self.bridge.clone(), self.tx.clone(), command);
    }

    /// Abandon the active session without saving.
    pub fn discard_session(&mut self) {
        self.timer.reset();
        self.timer_book_id = None;
        self.session_error = None;
        self.session_saved = false;
    }

    /// One-second tick from the event loop.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    // ------------------------------------------------------------------
    // Message handling
    // ------------------------------------------------------------------

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::BooksLoaded { generation, result } => {
                self.books.resolve(generation, result);
                let len = self.books.items().len();
                if self.selected_book >= len {
                    self.selected_book = len.saturating_sub(1);
                }
                // Re-kick membership lookups if a collection filter is on
                if let Some(collection_id) = self.filters.collection {
                    self.set_collection_filter(Some(collection_id));
                }
            }
            AppMessage::MembershipLoaded { book_id, result } => match result {
                Ok(collection_ids) => self.membership.insert(book_id, collection_ids),
                Err(error) => {
                    tracing::warn!(book_id, %error, "membership lookup failed");
                }
            },
            AppMessage::CollectionsLoaded { generation, result } => {
                self.collections.resolve(generation, result);
            }
            AppMessage::StatisticsLoaded { generation, result } => {
                self.statistics.resolve(generation, result);
            }
            AppMessage::TodaySessionsLoaded { generation, result } => {
                self.today_sessions.resolve(generation, result);
            }
            AppMessage::WeekSessionsLoaded { generation, result } => {
                self.week_sessions.resolve(generation, result);
            }
            AppMessage::SessionSaved { result } => match result {
                Ok(_) => {
                    self.timer.reset();
                    self.timer_book_id = None;
                    self.session_saved = true;
                    self.refresh_home();
                }
                Err(error) => {
                    // Keep the frozen timer so the user can retry
                    self.session_error = Some(error);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockBridge;
    use std::sync::Arc;

    fn test_app() -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bridge: SharedBridge = Arc::new(MockBridge::new());
        (App::new(bridge, tx), rx)
    }

    #[tokio::test]
    async fn test_cycle_status_filter_wraps_to_none() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.filters.status, None);
        for _ in 0..6 {
            app.cycle_status_filter();
            assert!(app.filters.status.is_some());
        }
        app.cycle_status_filter();
        assert_eq!(app.filters.status, None);
    }

    #[tokio::test]
    async fn test_session_save_error_keeps_timer() {
        let (mut app, _rx) = test_app();
        app.start_session(5);
        app.tick();
        app.tick();
        app.finish_session();
        app.handle_message(AppMessage::SessionSaved {
            result: Err("backend offline".to_string()),
        });
        assert_eq!(app.session_error.as_deref(), Some("backend offline"));
        assert_eq!(app.timer.elapsed_secs(), 2);
        assert_eq!(app.timer_book_id, Some(5));
    }

    #[tokio::test]
    async fn test_session_save_success_resets_timer() {
        let (mut app, _rx) = test_app();
        app.start_session(5);
        app.tick();
        app.finish_session();

        let saved = serde_json::json!({
            "id": 1, "book_id": 5, "reading_id": null,
            "session_date": "2026-03-14", "start_time": null, "end_time": null,
            "start_page": null, "end_page": null, "pages_read": null,
            "minutes_read": 1, "duration_seconds": null, "notes": null,
            "photo_path": null, "created_at": "2026-03-14T10:00:00Z",
            "updated_at": "2026-03-14T10:00:00Z", "duration_formatted": "1min"
        });
        let session: Session = serde_json::from_value(saved).unwrap();
        app.handle_message(AppMessage::SessionSaved { result: Ok(session) });

        assert!(app.session_saved);
        assert_eq!(app.timer.elapsed_secs(), 0);
        assert_eq!(app.timer_book_id, None);
    }
}

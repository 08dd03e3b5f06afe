//! Spawned backend fetches.
//!
//! Each helper takes the shared bridge and the message sender, runs the
//! api call on a tokio task, and reports back as an [`AppMessage`]. Errors
//! are stringified here, at the store boundary, so the rest of the app
//! only ever sees display text.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc::UnboundedSender;

use crate::api;
use crate::models::{BookQuery, CreateSessionCommand, SessionQuery};
use crate::traits::CommandBridge;

use super::messages::AppMessage;

pub type SharedBridge = Arc<dyn CommandBridge>;

/// Load the library book list.
pub fn spawn_list_books(
    bridge: SharedBridge,
    tx: UnboundedSender<AppMessage>,
    generation: u64,
    query: BookQuery,
) {
    tokio::spawn(async move {
        let result = api::books::list_books(&*bridge, &query)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::BooksLoaded { generation, result });
    });
}

/// Load collection membership for a single book.
///
/// The membership map fills in one book at a time; a failed lookup is
/// reported but leaves the book provisionally visible.
pub fn spawn_membership(bridge: SharedBridge, tx: UnboundedSender<AppMessage>, book_id: i64) {
    tokio::spawn(async move {
        let result = api::collections::list_collections(&*bridge, Some(book_id))
            .await
            .map(|collections| collections.iter().filter_map(|c| c.id).collect())
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::MembershipLoaded { book_id, result });
    });
}

/// Load the full collection list.
pub fn spawn_list_collections(
    bridge: SharedBridge,
    tx: UnboundedSender<AppMessage>,
    generation: u64,
) {
    tokio::spawn(async move {
        let result = api::collections::list_collections(&*bridge, None)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::CollectionsLoaded { generation, result });
    });
}

/// Load backend statistics for the home screen.
pub fn spawn_statistics(bridge: SharedBridge, tx: UnboundedSender<AppMessage>, generation: u64) {
    tokio::spawn(async move {
        let result = api::stats::get_statistics(&*bridge)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::StatisticsLoaded { generation, result });
    });
}

/// Load today's sessions.
pub fn spawn_today_sessions(
    bridge: SharedBridge,
    tx: UnboundedSender<AppMessage>,
    generation: u64,
    today: NaiveDate,
) {
    tokio::spawn(async move {
        let result = api::sessions::list_sessions(&*bridge, &SessionQuery::on(today))
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::TodaySessionsLoaded { generation, result });
    });
}

/// Load this week's sessions (Monday through today).
pub fn spawn_week_sessions(
    bridge: SharedBridge,
    tx: UnboundedSender<AppMessage>,
    generation: u64,
    week_start: NaiveDate,
    today: NaiveDate,
) {
    tokio::spawn(async move {
        let result = api::sessions::list_sessions(&*bridge, &SessionQuery::between(week_start, today))
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::WeekSessionsLoaded { generation, result });
    });
}

/// Save a session logged from the timer.
pub fn spawn_save_session(
    bridge: SharedBridge,
    tx: UnboundedSender<AppMessage>,
    command: CreateSessionCommand,
) {
    tokio::spawn(async move {
        let result = api::sessions::create_session(&*bridge, &command)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(AppMessage::SessionSaved { result });
    });
}

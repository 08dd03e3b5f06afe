//! Agenda blocks: scheduled reading slots on the calendar view.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled reading time slot, optionally linked to the session that
/// fulfilled it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaBlock {
    pub id: Option<i64>,
    pub book_id: Option<i64>,
    pub scheduled_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_completed: bool,
    pub completed_session_id: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `create_agenda_block`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgendaBlockCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `update_agenda_block`. The date is always sent; the rest is
/// partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAgendaBlockCommand {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `mark_agenda_block_completed`, linking the block to the
/// session that completed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkBlockCompletedCommand {
    pub id: i64,
    pub session_id: i64,
}

/// Server-side filters for `list_agenda_blocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgendaQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl AgendaQuery {
    /// Blocks within an inclusive date range (the week view).
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }
}

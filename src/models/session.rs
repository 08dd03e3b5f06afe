//! Reading sessions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sitting of reading, tied to a book and optionally to the
/// reading cycle it belongs to. `duration_seconds` and
/// `duration_formatted` are derived by the backend from the time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Option<i64>,
    pub book_id: i64,
    pub reading_id: Option<i64>,
    pub session_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub start_page: Option<i64>,
    pub end_page: Option<i64>,
    pub pages_read: Option<i64>,
    pub minutes_read: Option<i64>,
    pub duration_seconds: Option<i64>,
    pub notes: Option<String>,
    pub photo_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub duration_formatted: String,
}

/// Payload for `create_session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionCommand {
    pub book_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_id: Option<i64>,
    pub session_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_read: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateSessionCommand {
    /// Minimal command for a session logged against today.
    pub fn new(book_id: i64, session_date: NaiveDate) -> Self {
        Self {
            book_id,
            reading_id: None,
            session_date,
            start_time: None,
            end_time: None,
            start_page: None,
            end_page: None,
            minutes_read: None,
            notes: None,
        }
    }
}

/// Partial-field payload for `update_session`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSessionCommand {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_read: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Server-side filters for `list_sessions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl SessionQuery {
    /// Sessions for a single day.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            book_id: None,
            start_date: Some(date),
            end_date: Some(date),
        }
    }

    /// Sessions within an inclusive date range.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            book_id: None,
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    /// Sessions for one book.
    pub fn for_book(book_id: i64) -> Self {
        Self {
            book_id: Some(book_id),
            start_date: None,
            end_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let value = serde_json::to_value(SessionQuery::on(date)).unwrap();
        assert_eq!(
            value,
            json!({"start_date": "2026-03-14", "end_date": "2026-03-14"})
        );
    }

    #[test]
    fn test_create_command_minimal_wire_shape() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let cmd = CreateSessionCommand::new(7, date);
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value, json!({"book_id": 7, "session_date": "2026-03-14"}));
    }

    #[test]
    fn test_session_deserializes_time_range() {
        let raw = json!({
            "id": 12,
            "book_id": 7,
            "reading_id": null,
            "session_date": "2026-03-14",
            "start_time": "08:15:00",
            "end_time": "08:45:00",
            "start_page": 100,
            "end_page": 118,
            "pages_read": 18,
            "minutes_read": null,
            "duration_seconds": 1800,
            "notes": null,
            "photo_path": null,
            "created_at": "2026-03-14T08:45:02Z",
            "updated_at": "2026-03-14T08:45:02Z",
            "duration_formatted": "30min"
        });
        let session: Session = serde_json::from_value(raw).unwrap();
        assert_eq!(session.pages_read, Some(18));
        assert_eq!(
            session.start_time,
            Some(NaiveTime::from_hms_opt(8, 15, 0).unwrap())
        );
    }
}

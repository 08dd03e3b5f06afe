//! Notes and highlights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an entry is a free-form note or a highlighted passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Note,
    Highlight,
}

/// Reader's reaction attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Inspiration,
    Doubt,
    Reflection,
    Learning,
}

/// A note or highlight attached to a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<i64>,
    pub book_id: i64,
    pub reading_id: Option<i64>,
    pub page: Option<i64>,
    pub note_type: NoteKind,
    pub excerpt: Option<String>,
    pub content: String,
    pub sentiment: Option<Sentiment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `create_note`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteCommand {
    pub book_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    pub note_type: NoteKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Server-side filters for `list_notes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<NoteKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_wire_names() {
        assert_eq!(
            serde_json::to_value(Sentiment::Inspiration).unwrap(),
            json!("inspiration")
        );
        let parsed: Sentiment = serde_json::from_value(json!("learning")).unwrap();
        assert_eq!(parsed, Sentiment::Learning);
    }

    #[test]
    fn test_query_serializes_only_set_filters() {
        let query = NoteQuery {
            note_type: Some(NoteKind::Highlight),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"note_type": "highlight"})
        );
    }
}

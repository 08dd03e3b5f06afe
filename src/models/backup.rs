//! Backup registry payloads.

use serde::{Deserialize, Serialize};

/// Describes what a registered backup file contains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupMetadata {
    pub backup_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_count: Option<i64>,
}

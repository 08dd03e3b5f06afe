//! Backend-synced settings rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single key-value setting as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

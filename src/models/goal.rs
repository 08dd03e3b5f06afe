//! Reading goals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a goal measures and over which period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    PagesMonthly,
    BooksYearly,
    MinutesDaily,
}

/// A reading goal. `current_progress` and `progress_percentage` are
/// computed by the backend against the goal's period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Option<i64>,
    pub goal_type: GoalKind,
    pub target_value: i64,
    pub period_year: Option<i32>,
    pub period_month: Option<u32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub current_progress: i64,
    pub progress_percentage: f64,
}

/// Payload for `create_goal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalCommand {
    pub goal_type: GoalKind,
    pub target_value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

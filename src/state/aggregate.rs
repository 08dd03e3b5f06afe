//! Day and week aggregation over loaded sessions.
//!
//! The home screen derives its headline numbers from the already-fetched
//! session lists; nothing here goes back to the backend.

use std::collections::HashSet;

use crate::models::Session;

/// Totals for a single day's sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayTotals {
    pub pages: i64,
    pub minutes: i64,
    pub sessions: usize,
}

/// Totals for a week's sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekTotals {
    pub pages: i64,
    pub days_active: usize,
    pub sessions: usize,
}

/// Aggregate one day's sessions.
///
/// Minutes prefer the explicitly logged `minutes_read`; only when no
/// session carries minutes does the total fall back to the summed
/// `duration_seconds / 60`.
pub fn day_totals(sessions: &[Session]) -> DayTotals {
    let pages: i64 = sessions.iter().filter_map(|s| s.pages_read).sum();
    let minutes: i64 = sessions.iter().filter_map(|s| s.minutes_read).sum();
    let duration_secs: i64 = sessions.iter().filter_map(|s| s.duration_seconds).sum();

    DayTotals {
        pages,
        minutes: if minutes > 0 {
            minutes
        } else {
            duration_secs / 60
        },
        sessions: sessions.len(),
    }
}

/// Aggregate a week's sessions. `days_active` counts distinct session
/// dates.
pub fn week_totals(sessions: &[Session]) -> WeekTotals {
    let days: HashSet<_> = sessions.iter().map(|s| s.session_date).collect();
    WeekTotals {
        pages: sessions.iter().filter_map(|s| s.pages_read).sum(),
        days_active: days.len(),
        sessions: sessions.len(),
    }
}

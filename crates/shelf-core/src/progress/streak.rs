//! Once-per-session reading streak check.

use crate::models::UserStats;
use chrono::{DateTime, Duration, Utc};

/// What the streak check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Last reading was today.
    Unchanged,
    /// Last reading was yesterday.
    Extended,
    /// No reading yesterday or today, or no reading at all.
    Reset,
}

/// Evaluate the streak against the UTC calendar date of `now`.
///
/// The last reading date itself is left alone.
pub fn check_streak(stats: &mut UserStats, now: DateTime<Utc>) -> StreakChange {
    let today = now.date_naive();
    let yesterday = today - Duration::days(1);

    match stats.last_reading_date.map(|d| d.date_naive()) {
        Some(day) if day == today => StreakChange::Unchanged,
        Some(day) if day == yesterday => {
            stats.reading_streak = stats.reading_streak.saturating_add(1);
            StreakChange::Extended
        }
        _ => {
            stats.reading_streak = 0;
            StreakChange::Reset
        }
    }
}

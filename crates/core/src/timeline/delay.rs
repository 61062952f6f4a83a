//! Schedule slippage against a planned end date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// How far a planned date has slipped as of a reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDelay {
    /// Whole days past the planned date, rounded up; zero when not yet due.
    pub delay_days: i64,
    /// `delay_days > 0`.
    pub is_delayed: bool,
}

impl ScheduleDelay {
    /// Measures the delay of `planned_end` as of `now`.
    ///
    /// Any part of a started day counts as a full day.
    #[must_use]
    pub fn between(planned_end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let overdue_secs = (now - planned_end).num_seconds();
        let delay_days = if overdue_secs > 0 {
            let partial_day = overdue_secs % SECONDS_PER_DAY != 0;
            overdue_secs / SECONDS_PER_DAY + i64::from(partial_day)
        } else {
            0
        };

        Self {
            delay_days,
            is_delayed: delay_days > 0,
        }
    }
}

//! Time windows shared by the aggregators.

use chrono::{DateTime, Duration, Utc};
use filmflow_shared::config::AnalyticsConfig;
use serde::{Deserialize, Serialize};

/// Day windows used by budget and timeline analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalyticsWindows {
    /// Trailing window for the daily burn rate.
    pub burn_window_days: u32,
    /// Window in which a category counts as recently modified.
    pub recent_window_days: u32,
    /// Look-ahead for upcoming milestones.
    pub milestone_horizon_days: u32,
}

impl Default for AnalyticsWindows {
    fn default() -> Self {
        Self {
            burn_window_days: 30,
            recent_window_days: 7,
            milestone_horizon_days: 30,
        }
    }
}

impl From<&AnalyticsConfig> for AnalyticsWindows {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            burn_window_days: config.burn_window_days,
            recent_window_days: config.recent_window_days,
            milestone_horizon_days: config.milestone_horizon_days,
        }
    }
}

/// `now - days`, clamped to the earliest representable instant.
pub(crate) fn days_before(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// `now + days`, clamped to the latest representable instant.
pub(crate) fn days_after(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 15, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_days_before_and_after() {
        assert_eq!(
            days_before(now(), 30),
            Utc.with_ymd_and_hms(2024, 11, 15, 18, 30, 0).unwrap()
        );
        assert_eq!(
            days_after(now(), 30),
            Utc.with_ymd_and_hms(2025, 1, 14, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_huge_windows_clamp_instead_of_overflowing() {
        assert_eq!(days_before(now(), u32::MAX), DateTime::<Utc>::MIN_UTC);
        assert_eq!(days_after(now(), u32::MAX), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_from_config() {
        let config = AnalyticsConfig {
            burn_window_days: 14,
            ..AnalyticsConfig::default()
        };

        let windows = AnalyticsWindows::from(&config);

        assert_eq!(windows.burn_window_days, 14);
        assert_eq!(windows.recent_window_days, 7);
    }
}

//! Combined budget view for dashboards and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analytics::BudgetAnalytics;
use super::book::BudgetBook;
use super::forecast::BudgetForecast;
use super::variance::{CategoryVariance, category_breakdown};
use crate::windows::AnalyticsWindows;

/// Analytics, forecast and per-category breakdown as of one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Reference time of the report.
    pub as_of: DateTime<Utc>,
    /// Summary metrics.
    pub analytics: BudgetAnalytics,
    /// Spend projection.
    pub forecast: BudgetForecast,
    /// Per-category variance, in category order.
    pub breakdown: Vec<CategoryVariance>,
}

impl BudgetReport {
    /// Builds a report over the book's current state.
    #[must_use]
    pub fn build(
        book: &BudgetBook,
        now: DateTime<Utc>,
        forecast_days: u32,
        windows: &AnalyticsWindows,
    ) -> Self {
        let analytics = book.analytics_with(now, windows);
        let forecast = analytics.forecast(forecast_days, now);

        Self {
            as_of: now,
            analytics,
            forecast,
            breakdown: category_breakdown(book.categories()),
        }
    }
}

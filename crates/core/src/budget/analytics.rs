//! Budget analytics aggregation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{BudgetCategory, BudgetTransaction, CategoryStatus, TransactionType};
use crate::windows::{AnalyticsWindows, days_before};

/// Decimal places kept in the daily burn rate.
pub const BURN_RATE_DP: u32 = 10;

/// Summary metrics over a production's budget categories and transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAnalytics {
    /// Sum of allocated amounts.
    pub total_allocated: Decimal,
    /// Sum of spent amounts.
    pub total_spent: Decimal,
    /// Sum of forecasted amounts.
    pub total_forecasted: Decimal,
    /// `total_spent / total_allocated * 100`, zero without allocation.
    pub utilization_rate: Decimal,
    /// `total_forecasted - total_allocated`.
    pub forecast_variance: Decimal,
    /// Categories where spent exceeds allocated.
    pub categories_over_budget: usize,
    /// Categories flagged as warning.
    pub categories_warning: usize,
    /// Categories flagged as critical.
    pub categories_critical: usize,
    /// Average daily expense over the trailing burn window.
    pub burn_rate: Decimal,
    /// Categories updated within the recent window.
    pub recently_modified: usize,
}

impl BudgetAnalytics {
    /// Computes analytics with the default windows (30-day burn, 7-day recency).
    #[must_use]
    pub fn compute(
        categories: &[BudgetCategory],
        transactions: &[BudgetTransaction],
        now: DateTime<Utc>,
    ) -> Self {
        Self::compute_with(categories, transactions, now, &AnalyticsWindows::default())
    }

    /// Computes analytics with explicit windows.
    ///
    /// Input data is taken as-is: `remaining` is never checked against
    /// `allocated - spent`.
    #[must_use]
    pub fn compute_with(
        categories: &[BudgetCategory],
        transactions: &[BudgetTransaction],
        now: DateTime<Utc>,
        windows: &AnalyticsWindows,
    ) -> Self {
        let total_allocated = saturating_sum(categories.iter().map(|c| c.allocated));
        let total_spent = saturating_sum(categories.iter().map(|c| c.spent));
        let total_forecasted = saturating_sum(categories.iter().map(|c| c.forecasted));

        let count_status =
            |status: CategoryStatus| categories.iter().filter(|c| c.status == status).count();

        let recent_cutoff = days_before(now, windows.recent_window_days);
        let recently_modified = categories
            .iter()
            .filter(|c| c.last_updated.unwrap_or(now) > recent_cutoff)
            .count();

        Self {
            total_allocated,
            total_spent,
            total_forecasted,
            utilization_rate: utilization_rate(total_spent, total_allocated),
            forecast_variance: total_forecasted.saturating_sub(total_allocated),
            categories_over_budget: categories.iter().filter(|c| c.is_over_budget()).count(),
            categories_warning: count_status(CategoryStatus::Warning),
            categories_critical: count_status(CategoryStatus::Critical),
            burn_rate: burn_rate(transactions, now, windows.burn_window_days),
            recently_modified,
        }
    }
}

/// Percentage of `allocated` already spent; zero when nothing is allocated.
///
/// Saturates at `Decimal::MAX` / `Decimal::MIN` when the ratio does not fit.
#[must_use]
pub fn utilization_rate(spent: Decimal, allocated: Decimal) -> Decimal {
    if allocated.is_zero() {
        return Decimal::ZERO;
    }

    spent
        .checked_div(allocated)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if spent.is_sign_negative() == allocated.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Average daily expense over a fixed trailing window.
///
/// Only `expense` transactions booked strictly after `now - window_days`
/// count; their absolute amounts are summed and divided by the window
/// length, then rounded to [`BURN_RATE_DP`] places. No decay or outlier
/// handling.
#[must_use]
pub fn burn_rate(
    transactions: &[BudgetTransaction],
    now: DateTime<Utc>,
    window_days: u32,
) -> Decimal {
    if window_days == 0 {
        return Decimal::ZERO;
    }

    let cutoff = days_before(now, window_days);
    let recent_spend = saturating_sum(
        transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense && t.date > cutoff)
            .map(|t| t.amount.abs()),
    );

    (recent_spend / Decimal::from(window_days)).round_dp(BURN_RATE_DP)
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

//! Spend projection from the current burn rate.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::analytics::BudgetAnalytics;

const DAYS_PER_WEEK: u32 = 7;

/// Longest weekly cash-flow series a forecast carries (ten years).
pub const MAX_CASH_FLOW_WEEKS: u32 = 520;

/// Linear projection of spending over a horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetForecast {
    /// Horizon in days.
    pub days: u32,
    /// `burn_rate * days`.
    pub projected_spend: Decimal,
    /// `total_spent + projected_spend`.
    pub projected_total: Decimal,
    /// `total_allocated - projected_total`.
    pub projected_remaining: Decimal,
    /// Whether the projected total exceeds the allocation.
    pub is_over_budget: bool,
    /// Days until the remaining allocation is used up.
    ///
    /// `Some(0)` when nothing remains, `None` when there is budget left but
    /// no burn to project from.
    pub days_to_completion: Option<i64>,
    /// `now + days_to_completion`, when a forecast exists.
    pub completion_date: Option<DateTime<Utc>>,
    /// Week-by-week cumulative spend over the horizon.
    ///
    /// Ends with the first week in which the allocation is used up, and
    /// never exceeds [`MAX_CASH_FLOW_WEEKS`] entries.
    pub cash_flow_by_week: Vec<WeeklyCashFlow>,
}

/// Cumulative position at the end of a forecast week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCashFlow {
    /// Week number, starting at 1.
    pub week: u32,
    /// Cumulative spend, capped at the allocation.
    pub spent: Decimal,
    /// Allocation left, floored at zero.
    pub remaining: Decimal,
}

impl BudgetAnalytics {
    /// Projects spending `days` ahead at the current daily burn rate.
    #[must_use]
    pub fn forecast(&self, days: u32, now: DateTime<Utc>) -> BudgetForecast {
        let projected_spend = self.burn_rate.saturating_mul(Decimal::from(days));
        let projected_total = self.total_spent.saturating_add(projected_spend);
        let days_to_completion = self.days_to_completion();

        BudgetForecast {
            days,
            projected_spend,
            projected_total,
            projected_remaining: self.total_allocated.saturating_sub(projected_total),
            is_over_budget: projected_total > self.total_allocated,
            days_to_completion,
            completion_date: days_to_completion
                .and_then(TimeDelta::try_days)
                .and_then(|delta| now.checked_add_signed(delta)),
            cash_flow_by_week: self.weekly_cash_flow(days),
        }
    }

    /// `ceil((total_allocated - total_spent) / burn_rate)` while budget
    /// remains; zero once it is used up; `None` with a zero burn rate.
    #[must_use]
    pub fn days_to_completion(&self) -> Option<i64> {
        if self.total_allocated <= self.total_spent {
            return Some(0);
        }
        if self.burn_rate <= Decimal::ZERO {
            return None;
        }
        self.total_allocated
            .saturating_sub(self.total_spent)
            .checked_div(self.burn_rate)
            .and_then(|days| days.ceil().to_i64())
    }

    fn weekly_cash_flow(&self, days: u32) -> Vec<WeeklyCashFlow> {
        let weeks = days.div_ceil(DAYS_PER_WEEK).min(MAX_CASH_FLOW_WEEKS);
        let weekly_burn = self.burn_rate.saturating_mul(Decimal::from(DAYS_PER_WEEK));

        let mut flow = Vec::new();
        for week in 1..=weeks {
            let spent = self
                .total_spent
                .saturating_add(weekly_burn.saturating_mul(Decimal::from(week)));
            let remaining = self.total_allocated.saturating_sub(spent).max(Decimal::ZERO);

            flow.push(WeeklyCashFlow {
                week,
                spent: spent.min(self.total_allocated),
                remaining,
            });
            if remaining.is_zero() {
                break;
            }
        }
        flow
    }
}

//! Budget tracking: burn rate, utilization and spend forecasts.

pub mod analytics;
pub mod book;
pub mod forecast;
pub mod report;
pub mod types;
pub mod variance;

#[cfg(test)]
mod tests;

pub use analytics::{BURN_RATE_DP, BudgetAnalytics, burn_rate, utilization_rate};
pub use book::BudgetBook;
pub use forecast::{BudgetForecast, WeeklyCashFlow};
pub use report::BudgetReport;
pub use types::{
    BudgetCategory, BudgetTransaction, CategoryPatch, CategoryStatus, NewTransaction,
    TransactionType,
};
pub use variance::{CategoryVariance, VarianceStatus, category_breakdown};

//! Per-category variance breakdown.

use filmflow_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::analytics::utilization_rate;
use super::types::{BudgetCategory, CategoryStatus};

/// Variance classification for an expense line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Under budget.
    Favorable,
    /// Over budget.
    Unfavorable,
    /// Exactly on budget.
    OnBudget,
}

/// Allocated vs spent for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVariance {
    /// Category ID.
    pub id: CategoryId,
    /// Category name.
    pub category: String,
    /// Allocated amount.
    pub allocated: Decimal,
    /// Spent amount.
    pub spent: Decimal,
    /// `allocated - spent`; negative when over budget.
    pub variance: Decimal,
    /// Utilization percentage, rounded to 2 decimal places.
    pub utilization_percent: Decimal,
    /// Variance classification.
    pub variance_status: VarianceStatus,
    /// Status reported for the category.
    pub status: CategoryStatus,
}

impl CategoryVariance {
    /// Calculates the variance of a category treated as an expense line.
    #[must_use]
    pub fn for_category(category: &BudgetCategory) -> Self {
        let variance = category.allocated - category.spent;

        let variance_status = match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceStatus::Favorable,
            std::cmp::Ordering::Less => VarianceStatus::Unfavorable,
            std::cmp::Ordering::Equal => VarianceStatus::OnBudget,
        };

        Self {
            id: category.id.clone(),
            category: category.category.clone(),
            allocated: category.allocated,
            spent: category.spent,
            variance,
            utilization_percent: utilization_rate(category.spent, category.allocated).round_dp(2),
            variance_status,
            status: category.status,
        }
    }
}

/// Breaks every category down into its variance, in input order.
#[must_use]
pub fn category_breakdown(categories: &[BudgetCategory]) -> Vec<CategoryVariance> {
    categories.iter().map(CategoryVariance::for_category).collect()
}

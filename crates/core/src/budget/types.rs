//! Budget data types.

use chrono::{DateTime, Utc};
use filmflow_shared::types::{CategoryId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Health classification of a budget category, set by the department lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    /// Spending is in line with the plan.
    OnTrack,
    /// Spending needs attention.
    Warning,
    /// Spending is out of control.
    Critical,
}

/// A budget category (department line) of a production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category ID.
    pub id: CategoryId,
    /// Category name. Transactions reference categories by this name.
    pub category: String,
    /// Allocated amount.
    pub allocated: Decimal,
    /// Amount spent so far.
    pub spent: Decimal,
    /// Remaining amount, expected to equal `allocated - spent`.
    pub remaining: Decimal,
    /// Forecasted final spend.
    pub forecasted: Decimal,
    /// Category health.
    pub status: CategoryStatus,
    /// Last modification time. Missing values count as "now".
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl BudgetCategory {
    /// Returns true if spending exceeds the allocation.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.allocated
    }
}

/// Kind of budget transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money leaving the production.
    Expense,
    /// Manual correction.
    Adjustment,
    /// Move between categories.
    Transfer,
}

/// A budget transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTransaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Booking timestamp.
    pub date: DateTime<Utc>,
    /// Signed amount; expenses are negative.
    pub amount: Decimal,
    /// Free-form description.
    pub description: String,
    /// Name of the category this transaction belongs to.
    pub category: String,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Input for recording a new transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Booking timestamp.
    pub date: DateTime<Utc>,
    /// Signed amount; expenses are negative.
    pub amount: Decimal,
    /// Free-form description.
    pub description: String,
    /// Name of the category this transaction belongs to.
    pub category: String,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Assigns an identifier, producing a full transaction.
    #[must_use]
    pub fn with_id(self, id: TransactionId) -> BudgetTransaction {
        BudgetTransaction {
            id,
            date: self.date,
            amount: self.amount,
            description: self.description,
            category: self.category,
            kind: self.kind,
        }
    }
}

/// Partial update of a budget category. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    /// New category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New allocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated: Option<Decimal>,
    /// New spent amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<Decimal>,
    /// New remaining amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Decimal>,
    /// New forecast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasted: Option<Decimal>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CategoryStatus>,
    /// New modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl CategoryPatch {
    /// Merges the supplied fields into `target`.
    ///
    /// Derived fields are not recomputed: patching `spent` leaves
    /// `remaining` as it was unless the patch sets it too.
    pub fn apply(&self, target: &mut BudgetCategory) {
        if let Some(category) = &self.category {
            target.category.clone_from(category);
        }
        if let Some(allocated) = self.allocated {
            target.allocated = allocated;
        }
        if let Some(spent) = self.spent {
            target.spent = spent;
        }
        if let Some(remaining) = self.remaining {
            target.remaining = remaining;
        }
        if let Some(forecasted) = self.forecasted {
            target.forecasted = forecasted;
        }
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(last_updated) = self.last_updated {
            target.last_updated = Some(last_updated);
        }
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

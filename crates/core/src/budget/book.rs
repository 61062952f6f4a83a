//! In-memory budget state with the dashboard's mutation operations.

use chrono::{DateTime, Utc};
use filmflow_shared::types::{CategoryId, TransactionId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analytics::BudgetAnalytics;
use super::types::{
    BudgetCategory, BudgetTransaction, CategoryPatch, NewTransaction, TransactionType,
};
use crate::windows::AnalyticsWindows;

/// Categories and transactions of one production, owned by the caller.
///
/// Nothing here is persisted. Missing targets are skipped silently, matching
/// how the dashboard treats stale selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBook {
    categories: Vec<BudgetCategory>,
    transactions: Vec<BudgetTransaction>,
}

impl BudgetBook {
    /// Creates a book from already loaded data.
    #[must_use]
    pub fn new(categories: Vec<BudgetCategory>, transactions: Vec<BudgetTransaction>) -> Self {
        Self {
            categories,
            transactions,
        }
    }

    /// Budget categories in load order.
    #[must_use]
    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    /// Transactions, newest additions first.
    #[must_use]
    pub fn transactions(&self) -> &[BudgetTransaction] {
        &self.transactions
    }

    /// Looks up a category by ID.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Computes analytics over the current state with default windows.
    #[must_use]
    pub fn analytics(&self, now: DateTime<Utc>) -> BudgetAnalytics {
        BudgetAnalytics::compute(&self.categories, &self.transactions, now)
    }

    /// Computes analytics over the current state with explicit windows.
    #[must_use]
    pub fn analytics_with(
        &self,
        now: DateTime<Utc>,
        windows: &AnalyticsWindows,
    ) -> BudgetAnalytics {
        BudgetAnalytics::compute_with(&self.categories, &self.transactions, now, windows)
    }

    /// Replace-merges `patch` into the category with the given ID.
    ///
    /// Returns `false` (and changes nothing) if no category has that ID.
    pub fn update_category(&mut self, id: &CategoryId, patch: &CategoryPatch) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| &c.id == id) else {
            debug!(category_id = %id, "Budget category not found, update skipped");
            return false;
        };

        patch.apply(category);
        debug!(category_id = %id, "Budget category updated");
        true
    }

    /// Records a transaction under a freshly generated ID.
    pub fn add_transaction(&mut self, transaction: NewTransaction) -> TransactionId {
        let id = TransactionId::generate();
        self.insert_transaction(transaction.with_id(id.clone()));
        id
    }

    /// Records a transaction that already carries an ID (e.g. one created
    /// by the backend).
    ///
    /// The transaction is prepended. For expenses, every category whose
    /// *name* equals the transaction's category has its spent amount raised
    /// by the absolute amount and its remaining amount recomputed.
    pub fn insert_transaction(&mut self, transaction: BudgetTransaction) {
        if transaction.kind == TransactionType::Expense {
            let charge = transaction.amount.abs();
            let mut matched = 0_usize;

            for category in self
                .categories
                .iter_mut()
                .filter(|c| c.category == transaction.category)
            {
                category.spent += charge;
                category.remaining = category.allocated - category.spent;
                matched += 1;
            }

            if matched == 0 {
                debug!(
                    category = %transaction.category,
                    "No budget category with this name, spend not applied"
                );
            }
        }

        debug!(
            transaction_id = %transaction.id,
            category = %transaction.category,
            amount = %transaction.amount,
            "Transaction recorded"
        );
        self.transactions.insert(0, transaction);
    }
}

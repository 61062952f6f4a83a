//! Budget endpoints.

use filmflow_core::budget::{
    BudgetBook, BudgetCategory, BudgetTransaction, CategoryPatch, NewTransaction,
};
use filmflow_shared::types::{CategoryId, ProjectId};
use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Lists a project's budget categories.
    pub async fn list_categories(&self, project: &ProjectId) -> ClientResult<Vec<BudgetCategory>> {
        self.get_all(&format!("/projects/{project}/budget/categories/"))
            .await
    }

    /// Lists a project's budget transactions.
    pub async fn list_transactions(
        &self,
        project: &ProjectId,
    ) -> ClientResult<Vec<BudgetTransaction>> {
        self.get_all(&format!("/projects/{project}/budget/transactions/"))
            .await
    }

    /// Applies a partial update to a category and returns the stored copy.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        patch: &CategoryPatch,
    ) -> ClientResult<BudgetCategory> {
        let updated = self
            .send_json(Method::PATCH, &format!("/budget/categories/{id}/"), patch)
            .await?;
        info!(category_id = %id, "Budget category updated on backend");
        Ok(updated)
    }

    /// Records a transaction and returns it with its backend ID.
    pub async fn create_transaction(
        &self,
        project: &ProjectId,
        transaction: &NewTransaction,
    ) -> ClientResult<BudgetTransaction> {
        let created: BudgetTransaction = self
            .send_json(
                Method::POST,
                &format!("/projects/{project}/budget/transactions/"),
                transaction,
            )
            .await?;
        info!(
            project_id = %project,
            transaction_id = %created.id,
            "Transaction created on backend"
        );
        Ok(created)
    }

    /// Loads categories and transactions concurrently into a book.
    pub async fn load_budget(&self, project: &ProjectId) -> ClientResult<BudgetBook> {
        let (categories, transactions) = tokio::try_join!(
            self.list_categories(project),
            self.list_transactions(project)
        )?;

        info!(
            project_id = %project,
            categories = categories.len(),
            transactions = transactions.len(),
            "Budget loaded"
        );
        Ok(BudgetBook::new(categories, transactions))
    }
}

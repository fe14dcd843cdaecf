use crate::budgets::budgets_model::{Budget, BudgetInput, BudgetSummary};
use crate::errors::Result;
use crate::utils::MonthKey;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn find_by_month(&self, user_id: &str, month: MonthKey) -> Result<Option<Budget>>;
    /// All budgets for the user, newest month first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn upsert_budget(
        &self,
        user_id: &str,
        month: MonthKey,
        input: BudgetInput,
    ) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, month: MonthKey) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget(&self, user_id: &str, month: MonthKey) -> Result<Budget>;
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn set_budget(
        &self,
        user_id: &str,
        month: MonthKey,
        input: BudgetInput,
    ) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, month: MonthKey) -> Result<usize>;
    fn get_budget_summary(&self, user_id: &str, month: MonthKey) -> Result<BudgetSummary>;
}

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations. Every query is scoped to the
/// owning user; lists come back ordered by date descending, then by
/// created_at descending.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn list_by_category(&self, user_id: &str, category: &str) -> Result<Vec<Expense>>;
    fn list_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
    async fn insert_new_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, user_id: &str, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expenses_by_category(&self, user_id: &str, category: &str) -> Result<Vec<Expense>>;
    fn get_expenses_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, user_id: &str, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

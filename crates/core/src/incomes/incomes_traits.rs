use crate::errors::Result;
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for income repository operations. Queries are user-scoped and come
/// back ordered by date descending, then by created_at descending.
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Income>>;
    fn list_by_source(&self, user_id: &str, source: &str) -> Result<Vec<Income>>;
    fn list_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Income>>;
    async fn insert_new_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income>;
    async fn update_income(&self, user_id: &str, update: IncomeUpdate) -> Result<Income>;
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize>;
}

/// Trait for income service operations
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income>;
    fn get_incomes(&self, user_id: &str) -> Result<Vec<Income>>;
    fn get_incomes_by_source(&self, user_id: &str, source: &str) -> Result<Vec<Income>>;
    fn get_incomes_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Income>>;
    async fn create_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income>;
    async fn update_income(&self, user_id: &str, update: IncomeUpdate) -> Result<Income>;
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize>;
}

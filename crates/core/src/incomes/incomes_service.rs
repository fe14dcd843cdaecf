use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{DatabaseError, Result, ValidationError};
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::incomes::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};

pub struct IncomeService {
    repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(repository: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { repository }
    }

    fn validate(source: &str, description: &str, amount: Decimal) -> Result<()> {
        if source.trim().is_empty() {
            return Err(ValidationError::MissingField("source".to_string()).into());
        }
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if amount < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("amount must be non-negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income> {
        self.repository.get_income(user_id, income_id)
    }

    fn get_incomes(&self, user_id: &str) -> Result<Vec<Income>> {
        self.repository.list_for_user(user_id)
    }

    fn get_incomes_by_source(&self, user_id: &str, source: &str) -> Result<Vec<Income>> {
        self.repository.list_by_source(user_id, source)
    }

    fn get_incomes_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Income>> {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "start date {start} is after end date {end}"
            ))
            .into());
        }
        self.repository.list_by_date_range(user_id, start, end)
    }

    async fn create_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income> {
        Self::validate(&new_income.source, &new_income.description, new_income.amount)?;
        self.repository.insert_new_income(user_id, new_income).await
    }

    async fn update_income(&self, user_id: &str, update: IncomeUpdate) -> Result<Income> {
        Self::validate(&update.source, &update.description, update.amount)?;
        self.repository.update_income(user_id, update).await
    }

    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize> {
        let affected = self.repository.delete_income(user_id, income_id).await?;
        if affected == 0 {
            return Err(
                DatabaseError::NotFound(format!("No income found with id {income_id}")).into(),
            );
        }
        Ok(affected)
    }
}

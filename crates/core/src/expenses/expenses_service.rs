use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{DatabaseError, Result, ValidationError};
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }

    fn validate(category: &str, description: &str, amount: Decimal) -> Result<()> {
        if category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
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
impl ExpenseServiceTrait for ExpenseService {
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.repository.get_expense(user_id, expense_id)
    }

    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.repository.list_for_user(user_id)
    }

    fn get_expenses_by_category(&self, user_id: &str, category: &str) -> Result<Vec<Expense>> {
        self.repository.list_by_category(user_id, category)
    }

    fn get_expenses_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "start date {start} is after end date {end}"
            ))
            .into());
        }
        self.repository.list_by_date_range(user_id, start, end)
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        Self::validate(
            &new_expense.category,
            &new_expense.description,
            new_expense.amount,
        )?;
        self.repository.insert_new_expense(user_id, new_expense).await
    }

    async fn update_expense(&self, user_id: &str, update: ExpenseUpdate) -> Result<Expense> {
        Self::validate(&update.category, &update.description, update.amount)?;
        self.repository.update_expense(user_id, update).await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let affected = self.repository.delete_expense(user_id, expense_id).await?;
        if affected == 0 {
            return Err(
                DatabaseError::NotFound(format!("No expense found with id {expense_id}")).into(),
            );
        }
        Ok(affected)
    }
}

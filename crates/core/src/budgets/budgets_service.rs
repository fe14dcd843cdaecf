use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::budgets::budgets_model::{Budget, BudgetInput, BudgetMode, BudgetSummary};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::budgets::summary::compute_summary;
use crate::errors::{DatabaseError, Result, ValidationError};
use crate::expenses::ExpenseRepositoryTrait;
use crate::incomes::IncomeRepositoryTrait;
use crate::utils::MonthKey;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    income_repository: Arc<dyn IncomeRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        income_repository: Arc<dyn IncomeRepositoryTrait>,
    ) -> Self {
        BudgetService {
            repository,
            expense_repository,
            income_repository,
        }
    }

    /// Applies the mode rules: in category mode the total is the sum of the
    /// per-category amounts; in total mode the category map is dropped.
    fn normalize(mut input: BudgetInput) -> Result<BudgetInput> {
        if input.total_budget < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "total budget must be non-negative".to_string(),
            )
            .into());
        }
        for (category, amount) in &input.category_budgets {
            if category.trim().is_empty() {
                return Err(
                    ValidationError::MissingField("category name".to_string()).into(),
                );
            }
            if *amount < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "budget for '{category}' must be non-negative"
                ))
                .into());
            }
        }

        match input.mode {
            BudgetMode::Category => {
                input.total_budget = input.category_budgets.values().copied().sum();
            }
            BudgetMode::Total => {
                input.category_budgets.clear();
            }
        }
        Ok(input)
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget(&self, user_id: &str, month: MonthKey) -> Result<Budget> {
        self.repository.find_by_month(user_id, month)?.ok_or_else(|| {
            DatabaseError::NotFound(format!("No budget found for {month}")).into()
        })
    }

    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_for_user(user_id)
    }

    async fn set_budget(
        &self,
        user_id: &str,
        month: MonthKey,
        input: BudgetInput,
    ) -> Result<Budget> {
        let input = Self::normalize(input)?;
        debug!("Setting {} budget for {month}", input.mode);
        self.repository.upsert_budget(user_id, month, input).await
    }

    async fn delete_budget(&self, user_id: &str, month: MonthKey) -> Result<usize> {
        let affected = self.repository.delete_budget(user_id, month).await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound(format!("No budget found for {month}")).into());
        }
        Ok(affected)
    }

    fn get_budget_summary(&self, user_id: &str, month: MonthKey) -> Result<BudgetSummary> {
        let budget = self.get_budget(user_id, month)?;

        let expenses = self.expense_repository.list_by_date_range(
            user_id,
            month.first_day(),
            month.last_day(),
        )?;
        let incomes = self.income_repository.list_by_date_range(
            user_id,
            month.first_day(),
            month.last_day(),
        )?;

        Ok(compute_summary(&budget, &expenses, &incomes, month))
    }
}

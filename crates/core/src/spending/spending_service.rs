use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::spending::spending_model::SpendingOverview;
use crate::utils::MonthKey;

/// Trait defining the contract for the spending service
pub trait SpendingServiceTrait: Send + Sync {
    fn get_overview(&self, user_id: &str, month: MonthKey) -> Result<SpendingOverview>;
}

pub struct SpendingService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl SpendingService {
    pub fn new(expense_repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        SpendingService { expense_repository }
    }
}

impl SpendingServiceTrait for SpendingService {
    fn get_overview(&self, user_id: &str, month: MonthKey) -> Result<SpendingOverview> {
        debug!("Computing spending overview for {month}");

        let expenses = self.expense_repository.list_by_date_range(
            user_id,
            month.first_day(),
            month.last_day(),
        )?;

        let mut overview = SpendingOverview::new(month);
        for expense in &expenses {
            overview.add_expense(&expense.category, expense.amount);
        }
        Ok(overview)
    }
}

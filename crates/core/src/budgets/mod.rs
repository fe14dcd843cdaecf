//! Budgets module - monthly budget records and the spend-vs-budget summary.

mod budgets_model;
mod budgets_service;
mod budgets_traits;
mod summary;

#[cfg(test)]
mod summary_tests;

pub use budgets_model::{
    Budget, BudgetInput, BudgetMode, BudgetSummary, CategorySummary,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
pub use summary::compute_summary;

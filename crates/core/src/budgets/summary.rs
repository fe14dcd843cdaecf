//! Spend-vs-budget aggregation.
//!
//! A pure function of the fetched inputs: identical budget and transaction
//! lists always produce the identical summary. Monetary sums stay exact;
//! only the derived percentages are rounded, to
//! [`DISPLAY_DECIMAL_PRECISION`] places.

use rust_decimal::Decimal;

use crate::budgets::budgets_model::{Budget, BudgetSummary, CategorySummary};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::expenses::Expense;
use crate::incomes::Income;
use crate::utils::MonthKey;

/// Combine a month's budget with the user's transactions.
///
/// Expenses and incomes outside `month` are ignored via date-range checks on
/// the calendar day, never by matching on string prefixes. The breakdown
/// covers exactly the categories present in the budget: spend in any other
/// category contributes to `total_spent` but gets no per-category entry.
pub fn compute_summary(
    budget: &Budget,
    expenses: &[Expense],
    incomes: &[Income],
    month: MonthKey,
) -> BudgetSummary {
    let month_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .collect();

    let total_spent: Decimal = month_expenses.iter().map(|e| e.amount).sum();
    let remaining = budget.total_budget - total_spent;
    let percentage_used = percent_used(total_spent, budget.total_budget);

    let total_income: Decimal = incomes
        .iter()
        .filter(|i| month.contains(i.date))
        .map(|i| i.amount)
        .sum();
    let net = total_income - total_spent;

    let category_breakdown = budget
        .category_budgets
        .iter()
        .map(|(category, budgeted)| {
            let spent: Decimal = month_expenses
                .iter()
                .filter(|e| &e.category == category)
                .map(|e| e.amount)
                .sum();
            let entry = CategorySummary {
                budgeted: *budgeted,
                spent,
                remaining: *budgeted - spent,
                percentage_used: percent_used(spent, *budgeted),
            };
            (category.clone(), entry)
        })
        .collect();

    BudgetSummary {
        month,
        mode: budget.mode,
        total_budget: budget.total_budget,
        total_spent,
        remaining,
        percentage_used,
        total_income,
        net,
        category_breakdown,
    }
}

/// Share of `budgeted` consumed by `spent`, as a percentage. Zero when
/// nothing is budgeted, so an empty ceiling never divides by zero.
fn percent_used(spent: Decimal, budgeted: Decimal) -> Decimal {
    if budgeted > Decimal::ZERO {
        (spent / budgeted * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::MonthKey;

/// Where a month's money actually went, grouped by category.
///
/// Unlike the budget summary's breakdown, this covers every category with
/// spend in the month whether budgeted or not. The two views intentionally
/// stay separate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingOverview {
    pub month: MonthKey,
    pub total_spent: Decimal,
    pub by_category: HashMap<String, Decimal>,
    pub transaction_count: i32,
}

impl SpendingOverview {
    pub fn new(month: MonthKey) -> Self {
        SpendingOverview {
            month,
            total_spent: Decimal::ZERO,
            by_category: HashMap::new(),
            transaction_count: 0,
        }
    }

    pub fn add_expense(&mut self, category: &str, amount: Decimal) {
        *self
            .by_category
            .entry(category.to_string())
            .or_insert(Decimal::ZERO) += amount;
        self.total_spent += amount;
        self.transaction_count += 1;
    }
}

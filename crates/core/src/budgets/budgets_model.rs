//! Budget domain models.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::MonthKey;

/// How a month's ceiling is defined: per-category amounts that sum to the
/// total, or a single total with no breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetMode {
    Category,
    Total,
}

impl BudgetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetMode::Category => "category",
            BudgetMode::Total => "total",
        }
    }
}

impl FromStr for BudgetMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "category" => Ok(BudgetMode::Category),
            "total" => Ok(BudgetMode::Total),
            other => Err(format!("unknown budget mode '{other}'")),
        }
    }
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's spending ceiling for one calendar month. At most one exists per
/// (user, month); writes go through upsert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub month: MonthKey,
    pub total_budget: Decimal,
    pub category_budgets: HashMap<String, Decimal>,
    pub mode: BudgetMode,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Upsert payload for a month's budget. In category mode the stored total is
/// recomputed from the per-category amounts; in total mode the category map
/// is cleared.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    #[serde(default)]
    pub total_budget: Decimal,
    #[serde(default)]
    pub category_budgets: HashMap<String, Decimal>,
    pub mode: BudgetMode,
}

/// Derived spend-vs-budget view for one month. Never persisted; recomputed
/// on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub month: MonthKey,
    pub mode: BudgetMode,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub percentage_used: Decimal,
    pub total_income: Decimal,
    pub net: Decimal,
    /// Keyed by the budget's categories only; spend in unbudgeted categories
    /// still counts toward `total_spent` but gets no entry here.
    pub category_breakdown: HashMap<String, CategorySummary>,
}

/// Per-category slice of a [`BudgetSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage_used: Decimal,
}

//! Database models for monthly budgets.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_core::budgets::{Budget, BudgetMode};
use centime_core::utils::MonthKey;

/// Database model for budgets. The month is its "YYYY-MM" string (which also
/// sorts chronologically), amounts are TEXT, and the per-category map is a
/// JSON object in a TEXT column.
#[derive(
    Queryable,
    Insertable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub month: String,
    pub total_budget: String,
    pub category_budgets: String,
    pub mode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            month: MonthKey::from_str(&db.month).unwrap_or_else(|e| {
                log::error!("Failed to parse DB month '{}': {}", db.month, e);
                MonthKey::current()
            }),
            total_budget: Decimal::from_str(&db.total_budget).unwrap_or_default(),
            category_budgets: serde_json::from_str(&db.category_budgets).unwrap_or_default(),
            mode: BudgetMode::from_str(&db.mode).unwrap_or(BudgetMode::Total),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
